mod common;
mod test_buffer;

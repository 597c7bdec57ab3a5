#[cfg(test)]
mod test_chars;

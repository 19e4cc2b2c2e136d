use rand::Rng;

/// Generates a confirmation key: three random uppercase letters followed by
/// a number in 100..=999, e.g. "QXZ417". Uniqueness against the reservation
/// store is the caller's responsibility.
pub fn generate_key() -> String {
    let mut rng = rand::thread_rng();

    let letters: String = (0..3)
        .map(|_| rng.gen_range(b'A'..=b'Z') as char)
        .collect();
    let number: u32 = rng.gen_range(100..=999);

    format!("{}{}", letters, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_three_letters_then_three_digits() {
        for _ in 0..10_000 {
            let key = generate_key();
            assert_eq!(key.len(), 6, "unexpected key length: {}", key);
            assert!(key[..3].chars().all(|c| c.is_ascii_alphabetic()));
            assert!(key[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn successive_keys_are_not_all_identical() {
        let keys: Vec<String> = (0..50).map(|_| generate_key()).collect();
        assert!(keys.iter().any(|k| k != &keys[0]));
    }
}

use chrono::Utc;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Identifier for users, exercises and workouts: milliseconds since the
/// epoch followed by nine random base-36 characters.
pub fn generate_id() -> String {
    let mut id = Utc::now().timestamp_millis().to_string();
    id.extend((0..SUFFIX_LEN).map(|_| BASE36[fastrand::usize(..BASE36.len())] as char));
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        let (millis, suffix) = id.split_at(id.len() - SUFFIX_LEN);
        assert!(millis.parse::<i64>().is_ok());
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_generate_id_is_unique_in_a_burst() {
        let ids: HashSet<_> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}

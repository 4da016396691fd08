use crate::config::ClientConfig;
use crate::error::Result;
use crate::ports::KeyValueStore;

/// The auth header attached to outgoing GraphQL requests, if a token is
/// stored under the header storage key.
///
/// Note this reads `config.header_storage_key` (`access_token`), not the key
/// the login flow writes to (`token`).
pub fn token_header<S: KeyValueStore + ?Sized>(
    config: &ClientConfig,
    storage: &S,
) -> Result<Option<(String, String)>> {
    Ok(storage
        .get(&config.header_storage_key)?
        .map(|token| (config.header_name.clone(), token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStorage;

    #[test]
    fn header_comes_from_access_token_key() {
        let config = ClientConfig::default();
        let storage = MemoryStorage::new().with_item("access_token", "abc");
        assert_eq!(
            token_header(&config, &storage).unwrap(),
            Some(("token".to_string(), "abc".to_string()))
        );
    }

    #[test]
    fn login_token_key_is_not_read() {
        let config = ClientConfig::default();
        let storage = MemoryStorage::new().with_item("token", "abc");
        assert_eq!(token_header(&config, &storage).unwrap(), None);
    }
}

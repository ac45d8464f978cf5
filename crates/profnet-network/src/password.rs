//! Salted password digests.

use profnet_core::traits::StoredCredentials;

const DERIVE_CONTEXT: &str = "profnet password digest v1";

fn digest(salt: &str, password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new_derive_key(DERIVE_CONTEXT);
    hasher.update(salt.as_bytes());
    hasher.update(&[0]);
    hasher.update(password.as_bytes());
    hasher.finalize()
}

/// Digest `password` under a fresh random salt.
pub fn hash_password(password: &str) -> StoredCredentials {
    let salt = uuid::Uuid::new_v4().simple().to_string();
    StoredCredentials {
        password_hash: digest(&salt, password).to_hex().to_string(),
        salt,
    }
}

/// Constant-time check of `password` against stored credentials.
pub fn verify_password(password: &str, stored: &StoredCredentials) -> bool {
    match blake3::Hash::from_hex(&stored.password_hash) {
        Ok(expected) => digest(&stored.salt, password) == expected,
        Err(_) => false,
    }
}

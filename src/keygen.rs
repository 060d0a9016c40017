use anyhow::Result;
use rand::rngs::OsRng;
use rand::TryRngCore;
use strum_macros::EnumString;

pub const TOKEN_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const KEY_CHARSET: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()-_=+[]{}|;:,.<>?/~`";

const PUBLIC_KEY_PREFIX: &str = "UUG";
const SHORT_LINK_LEN: usize = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum KeyType {
    Public,
    Private,
}

/// `n` characters drawn uniformly from the 0-9A-Z token charset. Not
/// cryptographically secure, use `rand_key` for secrets.
pub fn rand_token(n: usize) -> String {
    random_string::generate(n, TOKEN_CHARSET)
}

pub fn generate_short_link() -> String {
    rand_token(SHORT_LINK_LEN)
}

/// 32 characters from the OS CSPRNG, each byte mapped into the printable
/// key charset.
pub fn rand_key() -> Result<String> {
    let mut bytes = [0u8; 32];
    OsRng.try_fill_bytes(&mut bytes)?;
    let key = bytes
        .iter()
        .map(|b| KEY_CHARSET[*b as usize % KEY_CHARSET.len()] as char)
        .collect();
    Ok(key)
}

/// Public keys are a recognizable `UUG`-prefixed token, private keys come
/// from the secure generator.
pub fn generate_key(key_type: KeyType) -> Result<String> {
    match key_type {
        KeyType::Public => Ok(format!("{PUBLIC_KEY_PREFIX}{}", rand_token(16))),
        KeyType::Private => rand_key(),
    }
}

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose, Engine};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub const SECRET_KEY_LENGTH: usize = 32;
pub const IV_LENGTH: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("secret key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),
    #[error("iv must be 16 bytes, got {0}")]
    InvalidIvLength(usize),
    #[error("ciphertext is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("ciphertext padding is invalid")]
    InvalidPadding,
    #[error("decrypted payload is not valid utf-8")]
    InvalidUtf8,
}

fn secret_key_bytes(secret_key: &str) -> Result<[u8; SECRET_KEY_LENGTH], CryptoError> {
    let bytes = secret_key.as_bytes();
    if bytes.len() != SECRET_KEY_LENGTH {
        return Err(CryptoError::InvalidKeyLength(bytes.len()));
    }
    let mut key = [0u8; SECRET_KEY_LENGTH];
    key.copy_from_slice(bytes);
    Ok(key)
}

fn iv_bytes(iv_key: &str) -> Result<[u8; IV_LENGTH], CryptoError> {
    let bytes = iv_key.as_bytes();
    if bytes.len() != IV_LENGTH {
        return Err(CryptoError::InvalidIvLength(bytes.len()));
    }
    let mut iv = [0u8; IV_LENGTH];
    iv.copy_from_slice(bytes);
    Ok(iv)
}

pub fn encrypt(plaintext: &str, secret_key: &str, iv_key: &str) -> Result<String, CryptoError> {
    let key = secret_key_bytes(secret_key)?;
    let iv = iv_bytes(iv_key)?;

    let ciphertext = Aes256CbcEnc::new(&key.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(general_purpose::STANDARD.encode(ciphertext))
}

pub fn decrypt(ciphertext: &str, secret_key: &str, iv_key: &str) -> Result<String, CryptoError> {
    let key = secret_key_bytes(secret_key)?;
    let iv = iv_bytes(iv_key)?;

    let raw = general_purpose::STANDARD.decode(ciphertext.trim())?;
    let plaintext = Aes256CbcDec::new(&key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&raw)
        .map_err(|_| CryptoError::InvalidPadding)?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidUtf8)
}

///wrapper function above envsubst to handle default values in form of ${VAR:-default}
pub mod envsubst;
mod error;
mod openfaas;
pub use openfaas::*;

pub use error::*;

pub const DEFAULT_GATEWAY: &str = "http://127.0.0.1:8080";

///label holding the file extension used when saving binary invocation responses
pub const UI_EXTENSION_LABEL: &str = "com.openfaas.ui.ext";

///metadata keys owned by the platform, never removable from the editor
pub const RESERVED_KEYS: [&str; 3] = ["com.openfaas.function", "com.openfaas.uid", "function"];

pub fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    *t == Default::default()
}

pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

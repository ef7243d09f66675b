use crate::Error;
use regex::{Captures, Regex};
use std::collections::HashMap;

///expands `${VAR}` and `${VAR:-default}` references using `vars`.
///an unset or empty variable falls back to its default, or to an empty string
pub fn substitute(data: &str, vars: &HashMap<String, String>) -> crate::Result<String> {
    let regex = Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*)(?::?-(.*?))?\}")
        .map_err(|e| Error::Custom(format!("{:?}", e)))?;

    let expanded = regex.replace_all(data, |cap: &Captures| {
        let default = cap.get(2).map_or("", |m| m.as_str());
        match vars.get(&cap[1]) {
            Some(val) if !val.is_empty() => val.clone(),
            _ => default.to_string(),
        }
    });
    Ok(expanded.into_owned())
}

use crate::client::add_query_params;
use utility::Result;

pub const SYSTEM_PATH: &str = "/system/functions";
pub const FUNCTION_PATH: &str = "/system/function";
pub const NAMESPACES_PATH: &str = "/system/namespaces";
pub const INVOKE_PATH: &str = "/function";
pub const NAMESPACE_KEY: &str = "namespace";

///builds a resource url scoped to `namespace`.
///the `namespace` query parameter is only added when a namespace is selected
pub fn build_url(path: &str, namespace: &str) -> Result<String> {
    if namespace.is_empty() {
        Ok(path.to_string())
    } else {
        add_query_params(path, &[(NAMESPACE_KEY, namespace)])
    }
}

///path describing a single function
pub fn function_path(function_name: &str) -> String {
    format!("{}/{}", FUNCTION_PATH, function_name)
}

///name.namespace, or only the name when no namespace is selected
pub fn qualified_name(function_name: &str, namespace: &str) -> String {
    if !namespace.is_empty() {
        format!("{}.{}", function_name, namespace)
    } else {
        function_name.to_string()
    }
}

///path a function is invoked on
pub fn invoke_path(function_name: &str, namespace: &str) -> String {
    format!("{}/{}", INVOKE_PATH, qualified_name(function_name, namespace))
}

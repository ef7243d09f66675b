use proxy::utils::{build_url, function_path, invoke_path, qualified_name};

#[test]
fn test_build_url() {
    struct TestCase {
        _title: &'static str,
        path: &'static str,
        namespace: &'static str,
        expected: &'static str,
    }
    let cases = vec![
        TestCase {
            _title: "Namespace is set",
            path: "/system/functions",
            namespace: "prod",
            expected: "/system/functions?namespace=prod",
        },
        TestCase {
            _title: "Namespace is not set",
            path: "/system/functions",
            namespace: "",
            expected: "/system/functions",
        },
        TestCase {
            _title: "Function path with namespace",
            path: "/system/function/cows",
            namespace: "openfaas-fn",
            expected: "/system/function/cows?namespace=openfaas-fn",
        },
    ];

    for case in cases {
        assert_eq!(build_url(case.path, case.namespace).unwrap(), case.expected);
    }
}

#[test]
fn test_function_paths() {
    assert_eq!(function_path("cows"), "/system/function/cows");
    assert_eq!(qualified_name("cows", ""), "cows");
    assert_eq!(qualified_name("cows", "dev"), "cows.dev");
    assert_eq!(invoke_path("cows", ""), "/function/cows");
    assert_eq!(invoke_path("cows", "dev"), "/function/cows.dev");
}

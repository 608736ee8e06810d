//! Central place for all default values.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {
    /* Output */
    pub const OUTPUT_FILE: &'static str = "secret.yaml";

    /* External tools */
    pub const KUBECTL_BIN: &'static str = "kubectl";
    pub const KUBESEAL_BIN: &'static str = "kubeseal";

    /* Text inputs */
    pub const INPUT_CHAR_LIMIT: usize = 32;
    pub const NAMESPACE_LABEL: &'static str = "Namespace";
    pub const SECRET_NAME_LABEL: &'static str = "Secret Name";
    pub const SECRET_KEY_LABEL: &'static str = "Secret Key";
    pub const NAMESPACE_PLACEHOLDER: &'static str = "my-kubernetes-namespace";
    pub const SECRET_NAME_PLACEHOLDER: &'static str = "my-secure-secret";
    pub const SECRET_KEY_PLACEHOLDER: &'static str = "my-file.yaml";
    pub const SUBMIT_LABEL: &'static str = "Continue";

    /* File browser */
    pub const PARENT_ENTRY: &'static str = "..";
    pub const BROWSER_PAGE: usize = 10;

    /* Footer */
    pub const NAVIGATION_HINT: &'static str =
        "(esc to go back to the previous step, ctrl+c to quit)";

    /* Logging */
    pub const LOG_FILTER: &'static str = "goseal=info";
}

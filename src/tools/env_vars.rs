#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value of an environment variable.
///
/// /!\ As this reads global state,
/// a function using `retrieve_env_var` could be tricky to test.
/// To do so, wrap your test with `with_env_vars(vars, fn)`.
/// This function is only available in a test context.
pub fn retrieve_env_var(name: &str) -> Option<String> {
    get_env_var(name)
}

/// Retrieve an environment variable which has to be set.
pub fn retrieve_expected_env_var<E>(name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_env_var(name).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

#[cfg(test)]
thread_local! {
    /// A mutable set of variables standing in for the process environment.
    /// When a test is run with `with_env_vars`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_VARS: RefCell<Vec<(String, String)>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_var(name: &str) -> Option<String> {
    ENV_VARS.with(|vars| {
        vars.borrow()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    })
}

#[cfg(test)]
/// When running tests, the process environment is never touched.
/// Set variables up by wrapping your test with this function.
pub fn with_env_vars<F, T>(vars: Vec<(&str, &str)>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_VARS.with(|refcell| {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        let old_value = refcell.replace(vars);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

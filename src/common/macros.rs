macro_rules! function_name {
    () => {{
        #[allow(dead_code)]
        fn f() {}
        #[allow(dead_code)]
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}
pub(crate) use function_name;

/// Raises a contract failure: a caller logic error, never a recoverable condition
macro_rules! contract_failure {
    ($message:expr) => {
        panic!(
            "{} (at {})",
            $message,
            $crate::common::macros::function_name!()
        )
    };
}
pub(crate) use contract_failure;

macro_rules! debug_asserts {
    ($block:block) => {
        cfg_if::cfg_if! {
            if #[cfg(debug_assertions)] {
                $block
            }
        }
    };
}
pub(crate) use debug_asserts;

/// Checks a slot/optional state precondition, in every build profile
macro_rules! assert_state {
    ($expr:expr, $message:expr) => {
        if !($expr) {
            $crate::common::macros::contract_failure!($message);
        }
    };
}
pub(crate) use assert_state;

//! Check and suite declaration macros
//!
//! The check macros expand to a call into [`crate::check`] followed by `?`,
//! so they can only be used inside functions returning a `Result` whose
//! error type is constructible from [`crate::CheckFailure`].

/// Expect a condition to be true.
#[macro_export]
macro_rules! z_expect_true {
    ($cond:expr $(,)?) => {
        $crate::check::expect_true($cond, stringify!($cond))?
    };
}

/// Expect a condition to be false.
#[macro_export]
macro_rules! z_expect_false {
    ($cond:expr $(,)?) => {
        $crate::check::expect_false($cond, stringify!($cond))?
    };
}

/// Expect `left == right`.
#[macro_export]
macro_rules! z_expect_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::check::expect_eq(&$left, &$right, stringify!($left), stringify!($right))?
    };
}

/// Expect `left != right`.
#[macro_export]
macro_rules! z_expect_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::check::expect_ne(&$left, &$right, stringify!($left), stringify!($right))?
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __z_expect_ordered {
    ($relation:ident, $left:expr, $right:expr) => {
        $crate::check::expect_ordered(
            $crate::check::Relation::$relation,
            &$left,
            &$right,
            stringify!($left),
            stringify!($right),
        )?
    };
}

/// Expect `left >= right`.
#[macro_export]
macro_rules! z_expect_ge {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__z_expect_ordered!(Ge, $left, $right)
    };
}

/// Expect `left <= right`.
#[macro_export]
macro_rules! z_expect_le {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__z_expect_ordered!(Le, $left, $right)
    };
}

/// Expect `left > right`.
#[macro_export]
macro_rules! z_expect_gt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__z_expect_ordered!(Gt, $left, $right)
    };
}

/// Expect `left < right`.
#[macro_export]
macro_rules! z_expect_lt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__z_expect_ordered!(Lt, $left, $right)
    };
}

/// Expect two numeric values (anything `Into<f64>`) to agree within
/// [`DOUBLE_TOLERANCE`](crate::DOUBLE_TOLERANCE).
#[macro_export]
macro_rules! z_expect_double_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::check::expect_double_eq($left, $right, stringify!($left), stringify!($right))?
    };
}

/// Expect two strings to have the same contents.
#[macro_export]
macro_rules! z_expect_str_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::check::expect_str_eq(&$left, &$right, stringify!($left), stringify!($right))?
    };
}

/// Build a [`Suite`](crate::Suite) from case functions, naming each case
/// after its function.
///
/// Evaluates to `SuiteResult<Suite<S>>`. The stateful form moves `state`
/// into the suite.
///
/// ```
/// use ztest::{z_expect_lt, z_suite, CheckResult};
///
/// fn ordering(_: &mut ()) -> CheckResult {
///     z_expect_lt!(1, 2);
///     Ok(())
/// }
///
/// let suite = z_suite!(Numbers; ordering).unwrap();
/// assert_eq!(suite.name(), "Numbers");
/// assert_eq!(suite.case_names().collect::<Vec<_>>(), ["ordering"]);
/// ```
#[macro_export]
macro_rules! z_suite {
    ($name:ident; $($case:path),* $(,)?) => {
        $crate::z_suite!($name with (); $($case),*)
    };
    ($name:ident with $state:expr; $($case:path),* $(,)?) => {
        (move || -> $crate::SuiteResult<_> {
            #[allow(unused_mut)]
            let mut suite = $crate::Suite::with_state(stringify!($name), $state);
            $(
                suite.add($crate::__z_case_name!($case), $case)?;
            )*
            ::core::result::Result::Ok(suite)
        })()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __z_case_name {
    ($case:path) => {{
        let full = stringify!($case);
        match full.rfind("::") {
            Some(pos) => full[pos + 2..].trim_start(),
            None => full,
        }
    }};
}

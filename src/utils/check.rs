//! `check!`: early return with logging at the point of failure.

/// Return `Err(err.into())` from the enclosing function when `cond` is false.
///
/// The failed condition and the error are logged right here, both to
/// `tracing` and to the library log slot, so the origin of an error is
/// recorded even if the caller only sees the status code.
#[macro_export]
macro_rules! check {
    ($cond:expr, $err:expr $(,)?) => {
        if !($cond) {
            let err = $err;
            ::tracing::error!("check failed: `{}`: {}", ::std::stringify!($cond), err);
            $crate::greeter_log!("check failed: `{}`: {}", ::std::stringify!($cond), err);
            return ::std::result::Result::Err(err.into());
        }
    };
}

/// Helper macro for verbose logging, expecting the last argument(s) in braces
macro_rules! vlog {
    ($args:expr, { $($arg:tt)* }) => {
        if $args.verbose {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use vlog;

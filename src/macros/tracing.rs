// Macros to emit events, compiling to nothing without the `tracing` feature.

macro_rules! __trace_internal {
    ($trace_type:ident; $($element:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$trace_type!($($element)*);
        }
    }};
}

macro_rules! __trace {
    ($($element:tt)*) => {
        __trace_internal!(trace; $($element)*)
    };
}

macro_rules! __debug {
    ($($element:tt)*) => {
        __trace_internal!(debug; $($element)*)
    };
}

macro_rules! __warn {
    ($($element:tt)*) => {
        __trace_internal!(warn; $($element)*)
    };
}

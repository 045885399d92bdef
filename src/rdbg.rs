// Roel Kluin, 2023, GPL v3

/// trace-level message, only compiled into debug builds.
#[macro_export]
macro_rules! dbg_print {
	($($arg:tt)*) => ({
		if cfg!(debug_assertions) {
			tracing::trace!($($arg)*);
		}
	})
}

#[macro_export]
macro_rules! dbg_assert {
	($($arg:tt)*) => ({
		debug_assert!($($arg)*);
	})
}

#[macro_export]
macro_rules! dbg_assert_eq {
	($($arg:tt)*) => ({
		debug_assert_eq!($($arg)*);
	})
}

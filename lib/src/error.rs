use std::fmt;
use std::panic::Location;
use std::error::Error as StdError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A generation failure: a message, its key/value context, and the failure
/// that caused it, if any.
#[derive(Debug, Clone)]
pub struct Error {
    message: String,
    context: Vec<(Option<String>, String)>,
    cause: Option<Box<Error>>,
    location: &'static Location<'static>,
}

impl Error {
    #[track_caller]
    pub fn new<M: fmt::Display>(message: M) -> Self {
        Error {
            message: message.to_string(),
            context: vec![],
            cause: None,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub fn from_std<E: StdError>(error: E) -> Self {
        let mut this = Error::new(&error);
        let mut source = error.source();
        while let Some(e) = source {
            this.context.push((None, e.to_string()));
            source = e.source();
        }

        this
    }

    pub fn with_context(mut self, key: Option<String>, value: String) -> Self {
        self.context.push((key, value));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &[(Option<String>, String)] {
        &self.context
    }

    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }

    /// Places `self` beneath `outer`, returning `outer`. If `outer` already
    /// has a cause, `self` is appended to the end of that chain.
    pub fn chain(self, mut outer: Error) -> Self {
        fn _chain(error: Error, behind: &mut Error) {
            match behind.cause.as_mut() {
                Some(cause) => _chain(error, cause),
                None => behind.cause = Some(Box::new(error)),
            }
        }

        _chain(self, &mut outer);
        outer
    }
}

macro_rules! impl_from_std_error {
    ($($T:ty),* $(,)?) => ($(
        impl From<$T> for Error {
            #[track_caller]
            fn from(error: $T) -> Self {
                Error::from_std(error)
            }
        }
    )*)
}

impl_from_std_error!(std::io::Error, toml::de::Error, minijinja::Error);

impl From<String> for Error {
    #[track_caller]
    fn from(message: String) -> Self {
        Error::new(message)
    }
}

impl From<&str> for Error {
    #[track_caller]
    fn from(message: &str) -> Self {
        Error::new(message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn nested(f: &mut fmt::Formatter<'_>, depth: usize, e: &Error) -> fmt::Result {
            let indent = " ".repeat(depth * 4);
            let newline = format!("\n{indent}");

            writeln!(f, "{indent}{}", e.message.replace('\n', &newline))?;
            for (key, value) in &e.context {
                let value = value.replace('\n', &newline);
                match key {
                    Some(key) => writeln!(f, "{indent}{key}: {value}")?,
                    None => writeln!(f, "{indent}{value}")?,
                }
            }

            if std::env::var_os("RUST_BACKTRACE").is_some() {
                writeln!(f, "{indent}[{}]", e.location)?;
            }

            match &e.cause {
                Some(cause) => nested(f, depth + 1, cause),
                None => Ok(()),
            }
        }

        nested(f, 0, self)
    }
}

impl StdError for Error { }

#[doc(hidden)]
#[macro_export]
macro_rules! err {
    ($($token:tt)*) => (Err($crate::error!($($token)*)));
}

/// Builds an [`Error`](crate::error::Error) from a message followed by
/// `key => value` or bare `value` context entries.
#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($msg:expr, $($rest:tt)*) => ({
        #[allow(unused_mut)]
        let mut error = $crate::error::Error::new($msg);
        $crate::error!(@param error $($rest)*);
        error
    });

    ($msg:expr) => ( $crate::error!($msg,) );

    (@param $e:ident $key:expr => $value:expr, $($rest:tt)*) => {
        $crate::error!(@param $e $key => $value);
        $crate::error!(@param $e $($rest)*);
    };

    (@param $e:ident $key:expr => $value:expr) => {
        $e = $e.with_context(Some($key.to_string()), $value.to_string());
    };

    (@param $e:ident $value:expr, $($rest:tt)*) => {
        $crate::error!(@param $e $value);
        $crate::error!(@param $e $($rest)*);
    };

    (@param $e:ident $value:expr) => {
        $e = $e.with_context(None, $value.to_string());
    };

    (@param $e:ident $(,)?) => { };
}

pub trait Chainable<T> {
    fn chain(self, other: impl Into<Error>) -> Result<T>;

    fn chain_with<F, E>(self, f: F) -> Result<T>
        where F: FnOnce() -> E, E: Into<Error>;
}

impl<T, E: Into<Error>> Chainable<T> for Result<T, E> {
    #[track_caller]
    fn chain(self, other: impl Into<Error>) -> Result<T> {
        self.map_err(|e| e.into().chain(other.into()))
    }

    #[track_caller]
    fn chain_with<F, Err>(self, f: F) -> Result<T>
        where F: FnOnce() -> Err, Err: Into<Error>,
    {
        self.map_err(|e| e.into().chain(f().into()))
    }
}

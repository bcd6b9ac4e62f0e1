use alloc::borrow::{Cow, ToOwned};
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::DisposeError;

/// Cleanup for values that hold resources.
///
/// `TinyMap::reset` calls `dispose` exactly once on every stored value that
/// exposes this capability through [`Value::as_dispose`].
pub trait Dispose {
    /// Releases the resources held by the value.
    ///
    /// # Errors
    ///
    /// Returns `DisposeError` if the cleanup failed. `reset` ignores it,
    /// `try_reset` reports it.
    fn dispose(&mut self) -> Result<(), DisposeError>;
}

/// A value that can be stored in a `TinyMap` and reset.
///
/// The default `as_dispose` reports no cleanup capability. Types that hold
/// resources implement [`Dispose`] and return `Some(self)`:
///
/// ```
/// use tinymap::{Dispose, DisposeError, Value};
///
/// struct Connection {
///     open: bool,
/// }
///
/// impl Dispose for Connection {
///     fn dispose(&mut self) -> Result<(), DisposeError> {
///         self.open = false;
///         Ok(())
///     }
/// }
///
/// impl Value for Connection {
///     fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
///         Some(self)
///     }
/// }
/// ```
pub trait Value {
    /// Returns the cleanup capability of this value, if any.
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        None
    }
}

macro_rules! impl_plain_value {
    ($($ty:ty),* $(,)?) => {
        $(impl Value for $ty {})*
    };
}

impl_plain_value!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &str,
    &[u8],
);

// Containers without a capability of their own; their elements are not disposed.
impl<T> Value for Vec<T> {}
impl<T, const N: usize> Value for [T; N] {}
impl<B: ToOwned + ?Sized> Value for Cow<'_, B> {}
impl<A, B> Value for (A, B) {}
impl<A, B, C> Value for (A, B, C) {}
impl<A, B, C, D> Value for (A, B, C, D) {}

impl<T: Value> Value for Option<T> {
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        self.as_mut().and_then(Value::as_dispose)
    }
}

impl<T: Value + ?Sized> Value for Box<T> {
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        (**self).as_dispose()
    }
}

/// A shared value is disposed only by its last owner: while other `Rc`s
/// (or weak references) exist, no capability is reported.
impl<T: Value + ?Sized> Value for Rc<T> {
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        Rc::get_mut(self).and_then(T::as_dispose)
    }
}

/// Same rule as for `Rc`: only a uniquely owned value is disposed.
#[cfg(target_has_atomic = "ptr")]
impl<T: Value + ?Sized> Value for Arc<T> {
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        Arc::get_mut(self).and_then(T::as_dispose)
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Dispose for std::io::BufWriter<W> {
    fn dispose(&mut self) -> Result<(), DisposeError> {
        std::io::Write::flush(self).map_err(|e| DisposeError::io("flush of buffered writer", &e))
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Value for std::io::BufWriter<W> {
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        Some(self)
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Dispose for std::io::LineWriter<W> {
    fn dispose(&mut self) -> Result<(), DisposeError> {
        std::io::Write::flush(self).map_err(|e| DisposeError::io("flush of line writer", &e))
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Value for std::io::LineWriter<W> {
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        Some(self)
    }
}

//! Change notification.

/// Class of types that want to be told when a value changes.
///
/// Notifications are delivered synchronously on the mutating thread, right after the write and before
/// the mutating call returns.
pub trait Observer: Send + Sync {
  fn on_change(&self);
}

impl<F> Observer for F
where
  F: Fn() + Send + Sync,
{
  fn on_change(&self) {
    self()
  }
}

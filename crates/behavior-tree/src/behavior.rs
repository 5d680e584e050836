//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the fundamental abstraction for
//! every decision strategy. The trait is generic over a context type `C`, so
//! strategies can read game state (and draw from injected services such as a
//! random source) while deciding.

/// A decision strategy that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Value proposed when the behavior applies (typically an action).
    type Output;

    /// Evaluate this behavior against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the decision context. Strategies may use
    ///   it to draw randomness, but must not mutate the world through it.
    ///
    /// # Returns
    ///
    /// - `Some(output)` if the behavior applies this turn
    /// - `None` if it declines, letting lower-priority behaviors run
    fn propose(&self, ctx: &mut C) -> Option<Self::Output>;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C, Output = O>>` to also implement
/// `Behavior<C>`, enabling heterogeneous selectors.
impl<C, O> Behavior<C> for Box<dyn Behavior<C, Output = O>> {
    type Output = O;

    #[inline]
    fn propose(&self, ctx: &mut C) -> Option<O> {
        (**self).propose(ctx)
    }
}

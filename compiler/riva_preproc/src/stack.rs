//! Stack safety for deep include nesting.
//!
//! Include chains recurse once per nesting level and there is no configured
//! depth cap, so a sufficiently deep (or self-including) program would blow
//! the fixed OS stack long before exhausting memory. Each recursion step
//! therefore grows the stack on demand via `stacker`; a genuine include
//! cycle still fails, but by running the host out of memory instead of
//! overflowing.
//!
//! WASM targets have no `stacker` support and manage their own stack, so
//! the wrapper is a passthrough there.

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (64KB red zone).
    const RED_ZONE: usize = 64 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_GROWTH: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_GROWTH, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_the_result() {
        assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
    }

    #[test]
    fn survives_deep_recursion() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }
        // Deep enough to overflow a default 8MB stack without growth.
        assert_eq!(depth(200_000), 200_000);
    }
}

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type CallbackFn = dyn FnMut() -> anyhow::Result<()>;

/// A zero-argument per-frame unit of work.
///
/// Identity is the instance: clones of a `Callback` share one allocation and count as the
/// same member of a [`Scheduler`](crate::Scheduler)'s registry.
#[derive(Clone)]
pub struct Callback {
    f: Rc<RefCell<CallbackFn>>,
}

impl Callback {
    pub fn new(mut f: impl FnMut() + 'static) -> Self {
        Self::fallible(move || {
            f();
            Ok(())
        })
    }

    /// A callback whose `Err` return is reported as a fault for the tick it ran in.
    pub fn fallible(f: impl FnMut() -> anyhow::Result<()> + 'static) -> Self {
        let f: Rc<RefCell<CallbackFn>> = Rc::new(RefCell::new(f));
        Self { f }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }

    /// Address of the shared allocation; stable while any clone is alive.
    pub(crate) fn identity(&self) -> usize {
        Rc::as_ptr(&self.f) as *const () as usize
    }

    pub(crate) fn invoke(&self) -> anyhow::Result<()> {
        let mut f = self
            .f
            .try_borrow_mut()
            .map_err(|_| anyhow::anyhow!("callback is already running"))?;
        (*f)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("identity", &format_args!("{:#x}", self.identity()))
            .finish()
    }
}

use tracing::debug;

// listener bindings
//
// owns whatever handles keep event listeners attached (in the browser, handles that detach their
// listener when dropped).  rebinding drops the previous set before taking the new one, so the
// same event can never be handled twice, and unmounting drops everything
#[derive(Debug)]
pub struct Bindings<H> {
    name: &'static str,
    handles: Vec<H>,
    mounted: bool,
}

impl<H> Bindings<H> {
    pub fn new(name: &'static str) -> Self {
        Bindings {
            name,
            handles: Vec::new(),
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn bind(&mut self, handles: Vec<H>) {
        let released = self.release();

        debug!(
            "{}: binding {} listeners, released {released}",
            self.name,
            handles.len()
        );

        self.handles = handles;
        self.mounted = true;
    }

    pub fn unmount(&mut self) -> usize {
        self.mounted = false;
        let released = self.release();

        debug!("{}: unmounted, released {released} listeners", self.name);
        released
    }

    fn release(&mut self) -> usize {
        let released = self.handles.len();

        // drop order matters for the browser handles, which detach on drop
        self.handles.clear();
        released
    }
}

impl<H> Drop for Bindings<H> {
    fn drop(&mut self) {
        if self.mounted {
            self.unmount();
        }
    }
}

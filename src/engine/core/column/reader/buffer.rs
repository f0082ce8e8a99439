use std::cell::RefCell;

thread_local! {
    static SCRATCH: RefCell<Vec<u8>> = RefCell::new(Vec::new());
}

/// Run `f` over a zeroed thread-local scratch buffer of `out_len` bytes. The
/// allocation is kept for the next call, so a scan that decompresses many
/// equally sized blocks allocates once.
pub fn with_scratch<R, E, F>(out_len: usize, f: F) -> Result<R, E>
where
    F: FnOnce(&mut [u8]) -> Result<R, E>,
{
    SCRATCH.with(|slot| {
        // Move the buffer out so `f` never runs under a RefCell borrow
        let mut buf = std::mem::take(&mut *slot.borrow_mut());
        buf.clear();
        buf.resize(out_len, 0);
        let result = f(&mut buf[..]);
        *slot.borrow_mut() = buf;
        result
    })
}

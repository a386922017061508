use std::ffi::c_int;
use std::slice;

/// Sorts the `len` C `int`s starting at `arr` ascending, in place.
///
/// This is the symbol foreign hosts bind to, e.g. from Python:
///
/// ```python
/// lib = ctypes.CDLL("./libmaxwell_mean_sort.so")
/// lib.maxwell_mean_sort_py.argtypes = [ctypes.POINTER(ctypes.c_int), ctypes.c_int]
/// lib.maxwell_mean_sort_py(buf, len(buf))
/// ```
///
/// # Safety
///
/// If `len > 0`, `arr` must be valid for reads and writes of `len` consecutive `c_int`s, and
/// nothing else may access that memory for the duration of the call. A buffer shorter than `len`
/// can not be detected.
///
/// # Panics
///
/// Panics if `len` is negative, or if `arr` is null and `len > 0`. A panic can not unwind across
/// the `extern "C"` boundary, so the process aborts.
#[no_mangle]
pub unsafe extern "C" fn maxwell_mean_sort_py(arr: *mut c_int, len: c_int) {
    let len = checked_len(arr, len);
    if len == 0 {
        return;
    }

    // SAFETY: `arr` is non-null, the caller guarantees the rest.
    let v = unsafe { slice::from_raw_parts_mut(arr, len) };
    crate::sort(v);
}

fn checked_len(arr: *const c_int, len: c_int) -> usize {
    let len = usize::try_from(len)
        .unwrap_or_else(|_| panic!("maxwell_mean_sort_py: negative length {len}"));

    if len != 0 && arr.is_null() {
        panic!("maxwell_mean_sort_py: null buffer with length {len}");
    }

    len
}

#[inline]
pub fn wrap_add(index: usize, addend: usize, storage_len: usize) -> usize {
    debug_assert!(addend <= storage_len);
    (index + addend) % storage_len
}

#[inline]
pub fn count(front: usize, rear: usize, storage_len: usize) -> usize {
    debug_assert!(front < storage_len);
    debug_assert!(rear < storage_len);
    if rear >= front {
        rear - front
    } else {
        storage_len + rear - front
    }
}

/// In-place ascending heap sort. Not stable.
///
/// O(n log n), no allocation.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    for i in (0..data.len() / 2).rev() {
        sift_down(data, i);
    }

    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0);
    }
}

/// Restores the max-heap property below `node`. O(log n)
fn sift_down<T: Ord>(data: &mut [T], mut node: usize) {
    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        if right < data.len() {
            let max = if data[left] < data[right] { right } else { left };

            if data[node] < data[max] {
                data.swap(node, max);
                node = max;
            } else {
                break;
            }
        } else {
            if right == data.len() && data[node] < data[left] {
                data.swap(node, left);
            }
            break;
        }
    }
}

/// Every `a[i] + b[j]`, row-major. `None` if any sum overflows.
pub fn cartesian_sum<T: num::CheckedAdd + Copy>(a: &[T], b: &[T]) -> Option<Vec<T>> {
    let mut sums = Vec::with_capacity(a.len().checked_mul(b.len())?);
    for x in a {
        for y in b {
            sums.push(x.checked_add(y)?);
        }
    }
    Some(sums)
}

/// The `k` smallest Cartesian sums of `a` and `b`, ascending.
pub fn smallest_sums<T: num::CheckedAdd + Copy + Ord>(a: &[T], b: &[T], k: usize) -> Option<Vec<T>> {
    let mut sums = cartesian_sum(a, b)?;
    heap_sort(&mut sums);
    sums.truncate(k);
    Some(sums)
}

extern crate immutable_slice;

use immutable_slice::slice;

// Cross-checks every operation against the in-place `Vec` methods it
// stands in for. The first two bytes pick the indices; the rest is the
// input slice.
fn main() {
    afl::fuzz!(|data: &[u8]| {
        if data.len() < 2 {
            return;
        }
        let (head, s) = data.split_at(2);
        let i = head[0] as usize % (s.len() + 1);
        let j = head[1] as usize % (s.len() + 1);
        let (i, j) = (i.min(j), i.max(j));
        let elems = &s[..s.len() / 2];

        let checks: Vec<(Vec<u8>, Vec<u8>)> = vec![
            (slice::append(s, elems), [s, elems].concat()),
            (slice::prepend(s, elems), [elems, s].concat()),
            (slice::insert(s, i, elems), {
                let mut v = s.to_vec();
                v.splice(i..i, elems.iter().cloned());
                v
            }),
            (slice::replace(s, i, j, elems), {
                let mut v = s.to_vec();
                v.splice(i..j, elems.iter().cloned());
                v
            }),
            (slice::delete(s, i, j), {
                let mut v = s.to_vec();
                v.drain(i..j);
                v
            }),
            (slice::delete_func(s, |x| x % 2 == 0), {
                let mut v = s.to_vec();
                v.retain(|x| x % 2 != 0);
                v
            }),
            (slice::compact(s), {
                let mut v = s.to_vec();
                v.dedup();
                v
            }),
            (slice::reverse(s), {
                let mut v = s.to_vec();
                v.reverse();
                v
            }),
            (slice::sort(s), {
                let mut v = s.to_vec();
                v.sort();
                v
            }),
            (slice::sort_stable_func(s, |a, b| (a / 16).cmp(&(b / 16))), {
                let mut v = s.to_vec();
                v.sort_by_key(|x| x / 16);
                v
            }),
        ];

        for (actual, expected) in &checks {
            assert_eq!(actual, expected);
            if actual.is_empty() {
                assert!(slice::is_absent(actual));
            }
        }
    });
}

#![no_main]
use std::{collections::VecDeque, mem};

use arbitrary::Arbitrary;
use blockseq::{Deque, Error};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    At(usize),
    Back,
    Clear,
    CloneFrom,
    Contains(i32),
    Cursor(usize, isize),
    Equals,
    Front,
    Get(usize),
    Insert(usize, i32),
    IsEmpty,
    Iter,
    Len,
    PopBack,
    PopFront,
    PushBack(i32),
    PushBackMany(u16, i32),
    PushFront(i32),
    PushFrontMany(u16, i32),
    Range(usize, usize),
    Remove(usize),
    Swap(usize, usize),
    SwapWith,
}

const MAX_LEN: usize = 1000000;

fuzz_target!(|data: Vec<Op>| { fuzz(&data) });

fn fuzz(data: &[Op]) {
    let (mut d1, mut d2) = (Deque::<i32>::new(), Deque::<i32>::new());
    let (mut v1, mut v2) = (VecDeque::<i32>::new(), VecDeque::<i32>::new());

    for op in data {
        match op {
            &Op::At(i) => {
                match d1.at(i) {
                    Ok(v) => assert_eq!(Some(v), v1.get(i)),
                    Err(e) => assert_eq!(e, Error::OutOfRange { index: i, len: v1.len() }),
                }
                assert_eq!(d2.at(i).ok(), v2.get(i));
            }
            Op::Back => {
                assert_eq!(d1.back(), v1.back());
                assert_eq!(d2.back(), v2.back());
            }
            Op::Clear => {
                d1.clear();
                d2.clear();
                v1.clear();
                v2.clear();
            }
            Op::CloneFrom => {
                d2.clone_from(&d1);
                v2.clone_from(&v1);
            }
            Op::Contains(i) => {
                assert_eq!(d1.contains(i), v1.contains(i));
                assert_eq!(d2.contains(i), v2.contains(i));
            }
            &Op::Cursor(i, offset) => {
                if v1.is_empty() {
                    continue;
                }
                let i1 = i % v1.len();
                let target = match i1.checked_add_signed(offset) {
                    Some(t) => t,
                    None => continue,
                };
                let c = d1.cursor_at(i1) + offset;
                assert_eq!(c.index(), target);
                assert_eq!(c.get(), v1.get(target));
                assert_eq!(c - d1.cursor_start(), target as isize);
            }
            Op::Equals => {
                assert!(d1.iter().eq(v1.iter()));
                assert!(d2.iter().eq(v2.iter()));
            }
            Op::Front => {
                assert_eq!(d1.front(), v1.front());
                assert_eq!(d2.front(), v2.front());
            }
            Op::Get(i) => {
                assert_eq!(d1.get(*i), v1.get(*i));
                assert_eq!(d2.get(*i), v2.get(*i));
                let i1 = *i & v1.len();
                let i2 = *i & v2.len();
                assert_eq!(d1.get(i1), v1.get(i1));
                assert_eq!(d2.get(i2), v2.get(i2));
            }
            &Op::Insert(i, a) => {
                let i1 = i % (v1.len() + 1);
                d1.insert(i1, a);
                v1.insert(i1, a);

                let i2 = i % (v2.len() + 1);
                d2.insert(i2, a);
                v2.insert(i2, a);
            }
            Op::IsEmpty => {
                assert_eq!(d1.is_empty(), v1.is_empty());
                assert_eq!(d2.is_empty(), v2.is_empty());
            }
            Op::Iter => {
                let mut d1_iter = d1.iter();
                let mut v1_iter = v1.iter();
                while v1_iter.len() > 0 {
                    if fastrand::bool() {
                        assert_eq!(d1_iter.next(), v1_iter.next());
                    } else {
                        assert_eq!(d1_iter.next_back(), v1_iter.next_back());
                    }
                }
                assert_eq!(d1_iter.next(), None);

                let mut d2_iter = d2.iter();
                let mut v2_iter = v2.iter();
                while v2_iter.len() > 0 {
                    if fastrand::bool() {
                        assert_eq!(d2_iter.next(), v2_iter.next());
                    } else {
                        assert_eq!(d2_iter.next_back(), v2_iter.next_back());
                    }
                }
                assert_eq!(d2_iter.next_back(), None);
            }
            Op::Len => {
                assert_eq!(d1.len(), v1.len());
                assert_eq!(d2.len(), v2.len());
            }
            Op::PopBack => {
                assert_eq!(d1.pop_back(), v1.pop_back());
                assert_eq!(d2.pop_back(), v2.pop_back());
            }
            Op::PopFront => {
                assert_eq!(d1.pop_front(), v1.pop_front());
                assert_eq!(d2.pop_front(), v2.pop_front());
            }
            Op::PushBack(i) => {
                if v1.len() < MAX_LEN {
                    d1.push_back(*i);
                    v1.push_back(*i);
                }
                if v2.len() < MAX_LEN {
                    d2.push_back(*i);
                    v2.push_back(*i);
                }
            }
            // enough pushes in one go to cross block boundaries
            &Op::PushBackMany(n, i) => {
                if v1.len() < MAX_LEN {
                    d1.extend((0..n as i32).map(|k| k ^ i));
                    v1.extend((0..n as i32).map(|k| k ^ i));
                }
            }
            Op::PushFront(i) => {
                if v1.len() < MAX_LEN {
                    d1.push_front(*i);
                    v1.push_front(*i);
                }
                if v2.len() < MAX_LEN {
                    d2.push_front(*i);
                    v2.push_front(*i);
                }
            }
            &Op::PushFrontMany(n, i) => {
                if v2.len() < MAX_LEN {
                    for k in 0..n as i32 {
                        d2.push_front(k ^ i);
                        v2.push_front(k ^ i);
                    }
                }
            }
            &Op::Range(min, max) => {
                if !v1.is_empty() {
                    let mut min1 = min % v1.len();
                    let mut max1 = max % v1.len();
                    if min1 > max1 {
                        mem::swap(&mut min1, &mut max1)
                    }

                    assert!(d1.range(min1..max1).eq(v1.range(min1..max1)));
                    assert!(d1.range(min1..max1).rev().eq(v1.range(min1..max1).rev()));
                }

                if !v2.is_empty() {
                    let mut min2 = min % v2.len();
                    let mut max2 = max % v2.len();
                    if min2 > max2 {
                        mem::swap(&mut min2, &mut max2)
                    }
                    assert!(d2.range(min2..max2).eq(v2.range(min2..max2)));
                }
            }
            &Op::Remove(i) => {
                if !v1.is_empty() {
                    let i1 = i % v1.len();
                    assert_eq!(d1.remove(i1), v1.remove(i1));
                }
                if !v2.is_empty() {
                    let i2 = i % v2.len();
                    assert_eq!(d2.remove(i2), v2.remove(i2));
                }
            }
            Op::Swap(i, j) => {
                if !v1.is_empty() {
                    let i1 = i % v1.len();
                    let j1 = j % v1.len();
                    d1.swap(i1, j1);
                    v1.swap(i1, j1);
                }

                if !v2.is_empty() {
                    let j2 = j % v2.len();
                    let i2 = i % v2.len();
                    d2.swap(i2, j2);
                    v2.swap(i2, j2);
                }
            }
            Op::SwapWith => {
                d1.swap_with(&mut d2);
                mem::swap(&mut v1, &mut v2);
            }
        }
    }
}

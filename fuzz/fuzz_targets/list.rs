#![no_main]
use std::collections::LinkedList;

use arbitrary::Arbitrary;
use blockseq::List;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Back,
    Clear,
    CloneFrom,
    Contains(i32),
    CursorWalk(usize),
    Equals,
    Front,
    IsEmpty,
    Iter,
    Len,
    PopBack,
    PopFront,
    PushBack(i32),
    PushFront(i32),
    SwapWith,
}

const MAX_LEN: usize = 100000;

fuzz_target!(|data: Vec<Op>| { fuzz(&data) });

fn fuzz(data: &[Op]) {
    let (mut l1, mut l2) = (List::<i32>::new(), List::<i32>::new());
    let (mut v1, mut v2) = (LinkedList::<i32>::new(), LinkedList::<i32>::new());

    for op in data {
        match op {
            Op::Back => {
                assert_eq!(l1.back(), v1.back());
                assert_eq!(l2.back(), v2.back());
            }
            Op::Clear => {
                l1.clear();
                v1.clear();
            }
            Op::CloneFrom => {
                l2.clone_from(&l1);
                v2.clone_from(&v1);
            }
            Op::Contains(i) => {
                assert_eq!(l1.contains(i), v1.contains(i));
                assert_eq!(l2.contains(i), v2.contains(i));
            }
            // walking len + 1 steps from the start always lands back on it
            &Op::CursorWalk(steps) => {
                let mut c = l1.cursor_start();
                let mut model = v1.iter();
                for _ in 0..steps % (v1.len() + 1) {
                    assert_eq!(c.current(), model.next());
                    c.move_next();
                }
                let mut c = l1.cursor_end();
                for _ in 0..=v1.len() {
                    c.move_next();
                }
                assert!(c.is_end());
            }
            Op::Equals => {
                assert!(l1.iter().eq(v1.iter()));
                assert!(l2.iter().eq(v2.iter()));
            }
            Op::Front => {
                assert_eq!(l1.front(), v1.front());
                assert_eq!(l2.front(), v2.front());
            }
            Op::IsEmpty => {
                assert_eq!(l1.is_empty(), v1.is_empty());
                assert_eq!(l2.is_empty(), v2.is_empty());
            }
            Op::Iter => {
                let mut l1_iter = l1.iter();
                let mut v1_iter = v1.iter();
                while v1_iter.len() > 0 {
                    if fastrand::bool() {
                        assert_eq!(l1_iter.next(), v1_iter.next());
                    } else {
                        assert_eq!(l1_iter.next_back(), v1_iter.next_back());
                    }
                }
                assert_eq!(l1_iter.next(), None);
            }
            Op::Len => {
                assert_eq!(l1.len(), v1.len());
                assert_eq!(l2.len(), v2.len());
            }
            Op::PopBack => {
                assert_eq!(l1.pop_back(), v1.pop_back());
                assert_eq!(l2.pop_back(), v2.pop_back());
            }
            Op::PopFront => {
                assert_eq!(l1.pop_front(), v1.pop_front());
                assert_eq!(l2.pop_front(), v2.pop_front());
            }
            Op::PushBack(i) => {
                if v1.len() < MAX_LEN {
                    l1.push_back(*i);
                    v1.push_back(*i);
                }
            }
            Op::PushFront(i) => {
                if v2.len() < MAX_LEN {
                    l2.push_front(*i);
                    v2.push_front(*i);
                }
            }
            Op::SwapWith => {
                l1.swap_with(&mut l2);
                std::mem::swap(&mut v1, &mut v2);
            }
        }
    }
}

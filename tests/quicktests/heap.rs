use refresher::{MaxHeap, MinHeap};

quickcheck::quickcheck! {
    fn max_heap_pops_in_descending_order(xs: Vec<i16>) -> bool {
        let mut heap = MaxHeap::from_elements(xs.iter().copied()).unwrap();
        let mut popped = Vec::with_capacity(xs.len());
        while let Some(x) = heap.pop().unwrap() {
            popped.push(x);
        }

        popped.windows(2).all(|pair| pair[0] >= pair[1]) && popped.len() == xs.len()
    }

    fn min_heap_pops_in_ascending_order(xs: Vec<i16>) -> bool {
        let mut heap = MinHeap::from_elements(xs.iter().copied()).unwrap();
        let mut popped = Vec::with_capacity(xs.len());
        while let Some(x) = heap.pop().unwrap() {
            popped.push(x);
        }

        popped.windows(2).all(|pair| pair[0] <= pair[1]) && popped.len() == xs.len()
    }

    fn peek_is_idempotent(xs: Vec<i16>) -> bool {
        let heap = MaxHeap::from_elements(xs.iter().copied()).unwrap();

        heap.peek() == heap.peek() && heap.peek() == xs.iter().max() && heap.is_empty() == xs.is_empty()
    }

    fn copies_pop_the_same(xs: Vec<i16>) -> bool {
        let mut heap = MinHeap::from_elements(xs.iter().copied()).unwrap();
        let mut copy = heap.clone();

        loop {
            match (heap.pop().unwrap(), copy.pop().unwrap()) {
                (None, None) => return true,
                (a, b) if a == b => {}
                _ => return false,
            }
        }
    }
}

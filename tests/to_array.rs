use primitive_list::{ArrayList, LinkedList, Primitive, PrimitiveCollection};

fn reuses_target<T, C>(collection: &C, fill: T)
where
    T: Primitive,
    C: PrimitiveCollection<T>,
{
    let len = collection.size();
    let expected = collection.to_vec();

    // too small: a fresh buffer of the exact length
    if len > 0 {
        let target = vec![fill; len - 1].into_boxed_slice();
        let ptr = target.as_ptr();
        let res = collection.to_array_primitive(target);
        assert_ne!(res.as_ptr(), ptr);
        assert_eq!(res.len(), len);
    }

    // exact fit
    let target = vec![fill; len].into_boxed_slice();
    let ptr = target.as_ptr();
    let res = collection.to_array_primitive(target);
    assert_eq!(res.as_ptr(), ptr);
    assert!(res.iter().zip(&expected).all(|(a, b)| a.same(*b)));

    // too big: the slot after the copy is reset, the rest is left alone
    let target = vec![fill; len + 2].into_boxed_slice();
    let ptr = target.as_ptr();
    let res = collection.to_array_primitive(target);
    assert_eq!(res.as_ptr(), ptr);
    assert!(res[len].same(T::ZERO));
    assert!(res[len + 1].same(fill));
}

#[test]
fn lists_fill_caller_buffers() {
    reuses_target(&ArrayList::from([0i64, 1, 2]), -1);
    reuses_target(&LinkedList::from([0i64, 1, 2]), -1);
    reuses_target(&ArrayList::from([0.0f64, 1.0, 2.0]), f64::NAN);
    reuses_target(&LinkedList::from([0.0f64, 1.0, 2.0]), f64::NAN);
    reuses_target(&ArrayList::<f64>::new(), 7.0);
    reuses_target(&LinkedList::<i64>::new(), 7);
}

#[test]
fn to_array_from_empty_target_allocates_exactly() {
    let list = LinkedList::from([1i64, 2]);
    let res = list.to_array_primitive(Box::default());
    assert_eq!(&*res, &[1, 2]);

    let list = ArrayList::<f64>::with_capacity(16).unwrap();
    let res = list.to_array_primitive(Box::default());
    assert!(res.is_empty());
}

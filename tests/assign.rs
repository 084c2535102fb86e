use num_complex::Complex64;
use strided_cunone::{
    cunone_array, cunone_assign, cunone_in_place, cunone_into, cunone_strided, ArrayRef,
    FnSequence, FnSequenceMut, InterleavedComplex, Sequence, StridedError, StridedView,
    StridedViewMut,
};

/// Output buffer mirroring the original fixtures, where `None` marks a slot
/// the scan must not touch.
fn slots(pattern: &[Option<bool>]) -> Vec<Option<bool>> {
    pattern.to_vec()
}

const T: Option<bool> = Some(true);
const F: Option<bool> = Some(false);
const N: Option<bool> = None;

/// The five layouts every input kind is exercised with.
fn check_layouts<S: Sequence + ?Sized>(
    all_truthy_ish: &S,
    third_truthy: &S,
    empty: &S,
    single_truthy: &S,
) {
    // unit stride, zero offset, overwriting a non-trivial buffer
    let mut y = vec![false, true, false, true, false];
    let out = cunone_assign(all_truthy_ish, &mut y, 1, 0).unwrap();
    assert_eq!(*out, vec![false; 5]);

    // stride 2 into alternating slots; odd slots untouched
    let mut y = slots(&[F, N, F, N, F, N, F, N, F, N]);
    cunone_assign(third_truthy, &mut y, 2, 0).unwrap();
    assert_eq!(y, slots(&[T, N, T, N, F, N, F, N, F, N]));

    // offset 1; slot 0 untouched
    let mut y = vec![false, false, false, true, true, true];
    cunone_assign(third_truthy, &mut y, 1, 1).unwrap();
    assert_eq!(y, vec![false, true, true, false, false, false]);

    // empty input leaves the output alone
    let mut y = vec![false; 5];
    cunone_assign(empty, &mut y, 1, 0).unwrap();
    assert_eq!(y, vec![false; 5]);

    // single truthy element at offset 1
    let mut y = vec![false, false];
    cunone_assign(single_truthy, &mut y, 1, 1).unwrap();
    assert_eq!(y, vec![false, false]);
}

#[cfg(feature = "json")]
#[test]
fn test_assign_generic() {
    use serde_json::{json, Value};

    let mut y = vec![false, true, false, true, false];
    let x = vec![json!(false), json!(false), json!(false), json!(true), json!(false)];
    cunone_assign(&x, &mut y, 1, 0).unwrap();
    assert_eq!(y, vec![true, true, true, false, false]);

    // Generic output buffer: untouched slots keep their null.
    let x = vec![json!(false), json!(false), json!(true), json!(false), json!(false)];
    let mut y: Vec<Value> = [false, true, false, true, false, true, false, true, false, true]
        .iter()
        .map(|&odd_slot| if odd_slot { Value::Null } else { json!(false) })
        .collect();
    cunone_assign(&x, &mut y, 2, 0).unwrap();
    assert_eq!(
        y,
        vec![
            json!(true),
            Value::Null,
            json!(true),
            Value::Null,
            json!(false),
            Value::Null,
            json!(false),
            Value::Null,
            json!(false),
            Value::Null,
        ]
    );

    let x: Vec<Value> = vec![];
    let mut y = vec![false; 5];
    cunone_assign(&x, &mut y, 1, 0).unwrap();
    assert_eq!(y, vec![false; 5]);

    let x = vec![json!(false)];
    let mut y = vec![false, false];
    cunone_assign(&x, &mut y, 1, 1).unwrap();
    assert_eq!(y, vec![false, true]);
}

#[test]
fn test_assign_float64() {
    check_layouts(
        &[1.0f64, 0.0, 1.0, 0.0, 1.0][..],
        &[0.0, 0.0, 1.0, 0.0, 0.0][..],
        &[][..],
        &[1.0][..],
    );
}

#[test]
fn test_assign_bool() {
    check_layouts(
        &[true, true, true, true, true][..],
        &[false, false, true, false, false][..],
        &[][..],
        &[true][..],
    );
}

#[test]
fn test_assign_packed_bool() {
    check_layouts(
        &[1u8, 1, 1, 1, 1][..],
        &[0, 0, 1, 0, 0][..],
        &[][..],
        &[1][..],
    );
}

#[test]
fn test_assign_complex128() {
    let a = [1.0f64, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0];
    let b = [0.0f64, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
    let e: [f64; 0] = [];
    let s = [1.0f64, 1.0];
    check_layouts(
        &InterleavedComplex::new(&a[..]).unwrap(),
        &InterleavedComplex::new(&b[..]).unwrap(),
        &InterleavedComplex::new(&e[..]).unwrap(),
        &InterleavedComplex::new(&s[..]).unwrap(),
    );
}

#[test]
fn test_assign_complex64() {
    let a = [0.0f32, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0];
    let b = [0.0f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    let e: [f32; 0] = [];
    let s = [1.0f32, 1.0];
    check_layouts(
        &InterleavedComplex::new(&a[..]).unwrap(),
        &InterleavedComplex::new(&b[..]).unwrap(),
        &InterleavedComplex::new(&e[..]).unwrap(),
        &InterleavedComplex::new(&s[..]).unwrap(),
    );
}

#[test]
fn test_assign_accessor() {
    let cases: [(&[bool], isize, usize, Vec<Option<bool>>, Vec<Option<bool>>); 6] = [
        (
            &[true, false, true, false, true],
            1,
            0,
            slots(&[F, T, F, T, F]),
            slots(&[F, F, F, F, F]),
        ),
        (
            &[false, false, true, false, false],
            2,
            0,
            slots(&[F, N, F, N, F, N, F, N, F, N]),
            slots(&[T, N, T, N, F, N, F, N, F, N]),
        ),
        (
            &[false, false, true, false, false],
            1,
            1,
            slots(&[F, F, F, F, F, F]),
            slots(&[F, T, T, F, F, F]),
        ),
        (
            &[true, false, false, false, false],
            1,
            0,
            slots(&[F, F, F, F, F]),
            slots(&[F, F, F, F, F]),
        ),
        (&[], 1, 0, slots(&[F, F, F, F, F]), slots(&[F, F, F, F, F])),
        (&[true], 1, 1, slots(&[F, F]), slots(&[F, F])),
    ];
    for (backing, stride, offset, mut ybuf, expected) in cases {
        let x = FnSequence::new(backing.len(), |i: usize| backing[i]);
        let len = ybuf.len();
        {
            let mut y = FnSequenceMut::new(len, |i, v| ybuf[i] = Some(v));
            cunone_assign(&x, &mut y, stride, offset).unwrap();
        }
        assert_eq!(ybuf, expected);
    }
}

#[test]
fn test_negative_output_stride() {
    let x = [0.0f64, 0.0, 2.0, 0.0];
    let mut y = [N; 6];
    cunone_assign(&x[..], &mut y[..], -1, 4).unwrap();
    assert_eq!(y, [N, F, F, T, T, N]);
}

#[test]
fn test_negative_input_stride_visits_last_first() {
    let x = [1.0f64, 0.0, 0.0, 0.0];
    let mut y = [false; 4];
    cunone_strided(&x[..], -1, 3, &mut y[..], 1, 0).unwrap();
    assert_eq!(y, [true, true, true, false]);

    // Partial reverse walk starting from the middle.
    let mut y = [N; 3];
    cunone_strided(&x[..], -1, 1, &mut y[..], 1, 1).unwrap();
    assert_eq!(y, [N, T, F]);
}

#[test]
fn test_reversed_view_matches_negative_stride() {
    let x = [0u8, 3, 0, 0, 0];
    let src = StridedView::contiguous(&x[..]).reversed();
    assert_eq!((src.stride(), src.offset()), (-1, 4));

    let mut via_view = [N; 5];
    let mut dest = StridedViewMut::contiguous(&mut via_view[..]);
    cunone_into(&mut dest, &src).unwrap();

    let mut via_strides = [N; 5];
    cunone_strided(&x[..], -1, 4, &mut via_strides[..], 1, 0).unwrap();
    assert_eq!(via_view, via_strides);
    assert_eq!(via_view, [T, T, T, F, F]);

    // Reversing twice restores the original walk.
    let forward = src.reversed();
    assert_eq!((forward.stride(), forward.offset(), forward.len()), (1, 0, 5));
}

#[test]
fn test_input_offset_and_stride() {
    let x = [9u8, 0, 9, 0, 9, 1, 9];
    let mut y = [N; 3];
    cunone_strided(&x[..], 2, 1, &mut y[..], 1, 0).unwrap();
    assert_eq!(y, [T, T, F]);
}

#[test]
fn test_output_offset_leaves_prefix() {
    let x = [false, false];
    let mut y = [N; 5];
    cunone_assign(&x[..], &mut y[..], 1, 3).unwrap();
    assert_eq!(y, [N, N, N, T, T]);
}

#[test]
fn test_array_dispatch_matches_typed_path() {
    let x = [
        Complex64::new(0.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(3.0, 0.0),
    ];
    let mut typed = [N; 6];
    let mut dispatched = [N; 6];
    cunone_assign(&x[..], &mut typed[..], 2, 1).unwrap();
    cunone_array(&ArrayRef::from(&x[..]), &mut dispatched[..], 2, 1).unwrap();
    assert_eq!(typed, dispatched);
    assert_eq!(typed, [N, T, N, T, N, F]);
}

#[test]
fn test_in_place_interleaved_slots() {
    // Inputs in the even slots; results written into the odd slots.
    let mut buf = vec![F, N, F, N, T, N, F, N];
    cunone_in_place(&mut buf, 4, 2, 0, 2, 1).unwrap();
    assert_eq!(buf, vec![F, T, F, T, T, F, F, F]);
}

#[test]
fn test_in_place_shifted_output() {
    // Output lags the input by one slot, so each write lands on an input
    // position that has already been read.
    let mut buf = vec![false, false, false, true, false, false];
    cunone_in_place(&mut buf, 5, 1, 1, 1, 0).unwrap();
    assert_eq!(buf, vec![true, true, false, false, false, false]);
}

#[test]
fn test_zero_stride_rejected_without_writes() {
    let x = [0.0f64, 1.0];
    let mut y = [N; 2];
    let err = cunone_assign(&x[..], &mut y[..], 0, 0).unwrap_err();
    assert!(matches!(err, StridedError::ZeroStride { operand: "output" }));
    let err = cunone_strided(&x[..], 0, 0, &mut y[..], 1, 0).unwrap_err();
    assert!(matches!(err, StridedError::ZeroStride { operand: "input" }));
    let mut buf = [0u8; 4];
    let err = cunone_in_place(&mut buf[..], 2, 1, 0, 0, 2).unwrap_err();
    assert!(matches!(err, StridedError::ZeroStride { operand: "output" }));
    assert_eq!(y, [N, N]);
}

#[test]
fn test_out_of_range_rejected_without_writes() {
    let x = [0.0f64; 5];
    let mut y = [N; 9];
    assert!(matches!(
        cunone_assign(&x[..], &mut y[..], 2, 1),
        Err(StridedError::OutOfRange { index: 9, len: 9 })
    ));
    assert!(matches!(
        cunone_assign(&x[..], &mut y[..], -1, 3),
        Err(StridedError::OutOfRange { index: -1, len: 9 })
    ));
    assert!(matches!(
        cunone_strided(&x[..], 1, 6, &mut y[..], 1, 0),
        Err(StridedError::OutOfRange { index: 6, len: 5 })
    ));
    assert!(matches!(
        cunone_assign(&x[..], &mut y[..], 1, 9),
        Err(StridedError::OutOfRange { index: 9, len: 9 })
    ));
    // Input offset one past the end, in either direction.
    assert!(matches!(
        cunone_strided(&x[..], -1, 5, &mut y[..], 1, 0),
        Err(StridedError::OutOfRange { index: 5, len: 5 })
    ));
    assert!(matches!(
        cunone_strided(&x[..], 1, 5, &mut y[..], 1, 0),
        Err(StridedError::OutOfRange { index: 5, len: 5 })
    ));
    let short = [1.0f64, 0.0];
    let mut y2 = [N; 2];
    assert!(matches!(
        cunone_strided(&short[..], -1, 2, &mut y2[..], 1, 0),
        Err(StridedError::OutOfRange { index: 2, len: 2 })
    ));
    assert_eq!(y2, [N, N]);
    assert_eq!(y, [N; 9]);

    // The last position that still fits.
    cunone_assign(&x[..], &mut y[..], 2, 0).unwrap();
    assert_eq!(y, [T, N, T, N, T, N, T, N, T]);
}

#[test]
fn test_error_messages() {
    let x = [true];
    let mut y: [bool; 0] = [];
    let err = cunone_assign(&x[..], &mut y[..], 1, 0).unwrap_err();
    assert_eq!(err.to_string(), "index 0 out of range for storage of length 0");
    let err = InterleavedComplex::new(&[1.0f64][..]).unwrap_err();
    assert_eq!(err.to_string(), "interleaved complex buffer has odd length 1");
}

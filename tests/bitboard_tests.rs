use tictactoe::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u16, 3>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 3>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());
    assert!(bb.is_empty());

    assert_eq!(
        bb.set(3, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 3, col: 0 })
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 3>::from_cells([(0, 1), (2, 2)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (2, 2)]);
    assert_eq!(bb.into_raw(), 0b100_000_010);
}

#[test]
fn test_complement_stays_in_grid() {
    let empty = BitBoard::<u16, 3>::new();
    let full = !empty;
    assert_eq!(full, BitBoard::<u16, 3>::full());
    assert_eq!(full.count_ones(), 9);
    assert_eq!(BitBoard::<u16, 3>::from_raw(0xFFFF), full);
}

#[test]
fn test_contains_all_line_mask() {
    let row = BitBoard::<u16, 3>::from_cells([(1, 0), (1, 1), (1, 2)]).unwrap();
    let mut held = BitBoard::<u16, 3>::from_cells([(1, 0), (1, 2), (0, 0)]).unwrap();
    assert!(!held.contains_all(row));
    held.set(1, 1).unwrap();
    assert!(held.contains_all(row));
    assert_eq!(held & row, row);
}

#[test]
fn test_debug_layout() {
    let bb = BitBoard::<u16, 3>::from_cells([(0, 0), (2, 1)]).unwrap();
    assert_eq!(format!("{:?}", bb), "BitBoard<u16, 3>[100/000/010]");
}

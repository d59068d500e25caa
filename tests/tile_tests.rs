//! Tile layout and palette tests.

use tui_maze::core::{
    color_for, color_for_code, layout_for, paint, paint_maze, paint_rgba, surface_size, GenerationPolicy,
    MazeGenerator, PixelBuffer,
};
use tui_maze::types::{GridPos, Rgba, Sides, TileElement, WallSide, TILE_SIZE};

fn sides(list: &[WallSide]) -> Sides {
    Sides::from_sides(list)
}

#[test]
fn test_north_east_open_walls_south_and_west() {
    let layout = layout_for(sides(&[WallSide::North, WallSide::East]));

    for y in 0..TILE_SIZE {
        for x in 0..TILE_SIZE {
            let expected = if y >= 8 || x <= 1 {
                TileElement::Wall
            } else {
                TileElement::Floor
            };
            assert_eq!(layout.get(x, y), Some(expected), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_each_closed_side_walls_its_two_border_lines() {
    for side in WallSide::CARDINALS {
        let mut open = Sides::all();
        open.remove(side);
        let layout = layout_for(open);

        for i in 0..TILE_SIZE {
            let (a, b) = match side {
                WallSide::North => ((i, 0), (i, 1)),
                WallSide::South => ((i, 9), (i, 8)),
                WallSide::West => ((0, i), (1, i)),
                WallSide::East => ((9, i), (8, i)),
                WallSide::None => unreachable!(),
            };
            assert_eq!(layout.get(a.0, a.1), Some(TileElement::Wall), "{:?}", side);
            assert_eq!(layout.get(b.0, b.1), Some(TileElement::Wall), "{:?}", side);
        }
        assert_eq!(
            layout.count(TileElement::Wall),
            2 * TILE_SIZE,
            "only {:?} is walled",
            side
        );
    }
}

#[test]
fn test_fully_open_tile_has_no_walls() {
    let layout = layout_for(Sides::all());
    assert_eq!(layout.count(TileElement::Wall), 0);
    assert_eq!(layout.count(TileElement::Floor), TILE_SIZE * TILE_SIZE);
}

#[test]
fn test_layout_is_a_pure_function() {
    let open = sides(&[WallSide::South, WallSide::West]);
    let first = layout_for(open);
    for _ in 0..10 {
        assert_eq!(layout_for(open), first);
    }
    // Inserting None does not change the set
    let mut with_none = open;
    with_none.insert(WallSide::None);
    assert_eq!(layout_for(with_none), first);
}

#[test]
fn test_palette_matches_classifications() {
    assert_eq!(color_for(TileElement::Floor), Rgba::new(200, 200, 200, 255));
    assert_eq!(color_for(TileElement::Wall), Rgba::new(30, 30, 30, 255));
    assert_eq!(color_for(TileElement::Empty), Rgba::new(30, 30, 30, 255));
    assert_eq!(color_for_code(200), Rgba::new(0, 0, 0, 255));
}

#[test]
fn test_painted_tile_lands_at_linear_rgba_offsets() {
    let buffer_width = TILE_SIZE * 3;
    let layout = layout_for(sides(&[WallSide::North, WallSide::South]));
    let pos = GridPos::new(1, 1);

    let mut raw = vec![0u8; buffer_width * TILE_SIZE * 2 * 4];
    paint_rgba(&layout, pos, &mut raw, buffer_width);

    // Local (0, 5) is west wall, (5, 5) is floor
    let wall_at = (TILE_SIZE + (TILE_SIZE + 5) * buffer_width) * 4;
    let floor_at = ((TILE_SIZE + 5) + (TILE_SIZE + 5) * buffer_width) * 4;
    assert_eq!(&raw[wall_at..wall_at + 4], &[30, 30, 30, 255]);
    assert_eq!(&raw[floor_at..floor_at + 4], &[200, 200, 200, 255]);

    let mut buf = PixelBuffer::new(buffer_width, TILE_SIZE * 2);
    paint(&layout, pos, &mut buf);
    assert_eq!(buf.data(), raw.as_slice());
}

#[test]
fn test_raw_maze_painting_matches_sink_painting() {
    let maze = MazeGenerator::new(GenerationPolicy::Constrained, 12)
        .generate(5, 3)
        .unwrap();
    let (w, h) = surface_size(&maze);

    let mut raw = PixelBuffer::new(w, h);
    for cell in maze.cells() {
        paint_rgba(&cell.layout(), cell.position(), raw.data_mut(), w);
    }

    let mut sink = PixelBuffer::new(w, h);
    paint_maze(&maze, &mut sink).unwrap();
    assert_eq!(raw.data(), sink.data());
}

#[test]
fn test_raw_painting_in_a_narrow_buffer_stays_in_its_own_region() {
    // Buffer holds one column of two tiles; a tile at column 1 must not land in row 1.
    let mut raw = vec![0u8; TILE_SIZE * TILE_SIZE * 2 * 4];
    paint_rgba(&layout_for(Sides::empty()), GridPos::new(1, 0), &mut raw, TILE_SIZE);
    assert!(raw.iter().all(|b| *b == 0));
}

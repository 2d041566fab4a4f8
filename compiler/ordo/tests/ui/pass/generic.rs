use std::borrow::Cow;
use std::rc::Rc;

use ordo::PropertyComparison;

#[derive(PropertyComparison)]
struct Entry<'a, K: Ord, V>
where
    V: PartialOrd,
{
    key: K,
    value: V,
    label: Cow<'a, str>,
    shared: Rc<str>,
    pair: (u8, String),
}

#[derive(PropertyComparison)]
#[comparison(target = "Grid<f32, 3>")]
struct Grid<T, const N: usize> {
    cells: [T; N],
    scale: T,
}

fn main() {
    let entry = Entry {
        key: 1_u8,
        value: 0.5_f64,
        label: Cow::Borrowed("x"),
        shared: Rc::from("y"),
        pair: (1, String::new()),
    };
    for name in ["key", "value", "label", "shared", "pair"] {
        assert!(Entry::<u8, f64>::get_comparison(name).is_some(), "{name}");
    }
    let _ = (&entry.key, &entry.value, &entry.label, &entry.shared, &entry.pair);

    let grid = Grid { cells: [0.0_f32; 3], scale: 1.0 };
    assert!(Grid::<f32, 3>::get_comparison("scale").is_some());
    let _ = (&grid.cells, &grid.scale);
}

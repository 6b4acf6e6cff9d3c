use keyset_pager::{Record, Value};

#[derive(Clone, Record)]
struct Tagged<T: Clone + Into<Value>> {
    id: u32,
    tag: T,
    #[record(skip)]
    _cache: (),
}

fn main() {
    let row = Tagged {
        id: 1,
        tag: "blue",
        _cache: (),
    };
    assert_eq!(row.field("tag"), Some(Value::from("blue")));
}

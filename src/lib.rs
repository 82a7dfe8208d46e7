//! Two independent in-memory associative containers: [`CharMap`], an
//! ordered map backed by an unbalanced binary search tree, and
//! [`ChainTable`], a fixed-size hash table with separately chained synonyms.

pub mod tree;
pub mod table;

pub use tree::{CharMap, Collector, Content};
pub use table::{ChainTable, TABLE_SIZE};

#[macro_export(local_inner_macros)]
macro_rules! charmap {
    // trailing comma case
    ($($key:expr => $content:expr,)+) => (charmap!($($key => $content),+));

    ( $($key:expr => $content:expr),* ) => {
        {
            let mut _map = $crate::CharMap::new();
            $(
                let _ = _map.insert($key, $content);
            )*
            _map
        }
    };
}

#[macro_export(local_inner_macros)]
macro_rules! chaintable {
    // trailing comma case
    ($($key:expr => $value:expr,)+) => (chaintable!($($key => $value),+));

    ( $($key:expr => $value:expr),* ) => {
        {
            let mut _table = $crate::ChainTable::new();
            $(
                let _ = _table.insert($key, $value);
            )*
            _table
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charmap_macro() {
        let map = charmap! {
            'a' => Content::Integer(2),
            'c' => Content::Integer(4),
            'b' => Content::Integer(3), // trailing comma
        };

        let mut items = Vec::new();
        map.inorder(&mut items);
        assert_eq!(&items, &[
            ('a', Content::Integer(2)),
            ('b', Content::Integer(3)),
            ('c', Content::Integer(4)),
        ]);

        // No trailing comma
        let map = charmap!['z' => Content::Text(None)];

        let mut items = Vec::new();
        map.inorder(&mut items);
        assert_eq!(&items, &[('z', Content::Text(None))]);

        // Zero items
        let map = charmap!();
        assert!(map.is_empty());
    }

    #[test]
    fn chaintable_macro() {
        let table = chaintable! {
            "abc" => 1.0,
            "cba" => 2.0, // trailing comma
        };

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("abc"), Some(&1.0));
        assert_eq!(table.get("cba"), Some(&2.0));

        // No trailing comma
        let table = chaintable!["pi" => 3.14];
        assert_eq!(table.get("pi"), Some(&3.14));

        // Zero items
        let table = chaintable!();
        assert!(table.is_empty());
    }
}

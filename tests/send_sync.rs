//! Both containers own all of their data, so they should be freely movable
//! and shareable across threads.

use static_assertions::assert_impl_all;

use treetable::tree::Node;
use treetable::{ChainTable, CharMap, Content};

assert_impl_all!(CharMap: Send, Sync);
assert_impl_all!(Content: Send, Sync);
assert_impl_all!(Node: Send, Sync);
assert_impl_all!(ChainTable: Send, Sync);

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::TextAttribute;

/// The longest color command is `8;5;255` (7 bytes), so commands never spill to the heap.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// There are only 6 distinct attribute codes; aliases may repeat some of them.
pub const MAX_TEXT_ATTRIBUTE_SIZE: usize = 8;
pub type InlineVecTextAttributes = SmallVec<[TextAttribute; MAX_TEXT_ATTRIBUTE_SIZE]>;

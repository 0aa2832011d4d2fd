use crate::loc::Loc;

/// This trait lets the error reporting functions accept a variety of things as the error locator.
pub trait ErrorLoc {
    fn loc_length(&self) -> usize {
        1
    }
    fn into_loc(self) -> Loc;
}

impl ErrorLoc for Loc {
    fn into_loc(self) -> Loc {
        self
    }
}

/// A loc with an explicit length, for pointing at a whole name rather than its first character.
impl ErrorLoc for (Loc, usize) {
    fn loc_length(&self) -> usize {
        self.1
    }

    fn into_loc(self) -> Loc {
        self.0
    }
}

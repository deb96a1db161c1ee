use std::slice::Iter;

use crate::pyramid::octave::Octave;

/// Octaves ordered from the finest resolution (index 0) down, each one halving the previous.
#[derive(Debug,Clone,PartialEq)]
pub struct ScaleSpace {
    octaves: Vec<Octave>
}

impl ScaleSpace {
    pub(crate) fn new(octaves: Vec<Octave>) -> ScaleSpace {
        debug_assert!(!octaves.is_empty());
        ScaleSpace{ octaves }
    }

    pub fn octaves(&self) -> &[Octave] {
        &self.octaves
    }

    pub fn get(&self, octave_level: usize) -> Option<&Octave> {
        self.octaves.get(octave_level)
    }

    pub fn len(&self) -> usize {
        self.octaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octaves.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Octave> {
        self.octaves.iter()
    }

    pub fn into_octaves(self) -> Vec<Octave> {
        self.octaves
    }
}

impl<'a> IntoIterator for &'a ScaleSpace {
    type Item = &'a Octave;
    type IntoIter = Iter<'a, Octave>;

    fn into_iter(self) -> Self::IntoIter {
        self.octaves.iter()
    }
}

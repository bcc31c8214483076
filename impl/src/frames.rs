//! Size accumulation for the write path.
//!
//! The encoded size of a record is computed by a prelude emitted ahead of the
//! buffer allocation. Each level of loop nesting in the body owns one frame
//! of `(static bytes, dynamic terms)`. Frames discovered during descent must
//! appear *before* their enclosing loop's contribution in the finished
//! prelude, so fragments are collected in reverse and the list is flipped
//! once at the end.

use crate::emit::length;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SizeFrame {
    pub static_bytes: usize,
    pub dynamic_terms: Vec<String>,
}

/// What kind of collection a popped frame belonged to. `Root` is the frame
/// covering the record itself.
#[derive(Debug)]
pub enum FrameKind<'a> {
    Root,
    Slice { place: &'a str, var: &'a str },
    Array { len: usize, var: &'a str },
}

#[derive(Debug)]
pub struct FrameStack {
    frames: Vec<SizeFrame>,
    /// Prelude fragments, deepest-frame-exit first.
    rev: Vec<String>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self {
            frames: vec![SizeFrame::default()],
            rev: Vec::new(),
        }
    }

    /// Loop nesting depth; the root frame does not count.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    fn top(&mut self) -> &mut SizeFrame {
        self.frames.last_mut().expect("root frame never popped")
    }

    pub fn add_static(&mut self, n: usize) {
        self.top().static_bytes += n;
    }

    pub fn add_dynamic(&mut self, term: String) {
        self.top().dynamic_terms.push(term);
    }

    /// Enter a slice or array. The closing brace of the loop that *may* be
    /// emitted at exit goes in first; it reverses to the end.
    pub fn push_frame(&mut self) {
        self.frames.push(SizeFrame::default());
        if self.depth() >= 1 {
            self.rev.push("}".to_owned());
        }
    }

    /// Leave a collection, discharging the frame into the parent.
    ///
    /// A frame with no dynamic terms contributes a constant per iteration, so
    /// no loop is needed: the brace is retracted and the total is folded into
    /// the parent as `n * len(..)` (slice) or plain static bytes (array).
    /// Everything else becomes a loop in the prelude.
    pub fn pop_frame(&mut self, kind: FrameKind<'_>) {
        let frame = self.frames.pop().expect("pop without matching push");
        let folded = frame.dynamic_terms.is_empty() && !matches!(kind, FrameKind::Root);
        if folded {
            let brace = self.rev.pop();
            debug_assert_eq!(brace.as_deref(), Some("}"));
            match kind {
                FrameKind::Slice { place, .. } => {
                    self.top()
                        .dynamic_terms
                        .push(format!("{} * {}", frame.static_bytes, length(place)));
                }
                FrameKind::Array { len, .. } => {
                    self.top().static_bytes += frame.static_bytes * len;
                }
                FrameKind::Root => unreachable!(),
            }
            return;
        }

        if !frame.dynamic_terms.is_empty() {
            self.rev
                .push(format!("size += {};", frame.dynamic_terms.join(" + ")));
        }
        match kind {
            FrameKind::Root => {
                self.rev
                    .push(format!("let mut size = {};", frame.static_bytes));
            }
            FrameKind::Slice { place, var } => {
                self.rev.push(format!("size += {};", frame.static_bytes));
                self.rev.push(format!("for {var} in {place}.iter() {{"));
            }
            FrameKind::Array { len, var } => {
                self.rev.push(format!("size += {};", frame.static_bytes));
                self.rev.push(format!("for {var} in 0..{len} {{"));
            }
        }
    }

    /// The finished prelude. Valid only after the root frame was popped.
    pub fn into_prelude(mut self) -> String {
        debug_assert!(self.frames.is_empty());
        self.rev.reverse();
        let mut out = self.rev.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_static_record() {
        let mut st = FrameStack::new();
        st.add_static(34);
        st.pop_frame(FrameKind::Root);
        assert_eq!(st.into_prelude(), "let mut size = 34;\n");
    }

    #[test]
    fn string_contributes_prefix_and_term() {
        let mut st = FrameStack::new();
        st.add_static(2);
        st.add_dynamic("self.s.len()".to_owned());
        st.pop_frame(FrameKind::Root);
        assert_eq!(
            st.into_prelude(),
            "let mut size = 2;\nsize += self.s.len();\n"
        );
    }

    #[test]
    fn static_slice_folds_into_factor() {
        // Vec<i8>: the element frame never turns into a loop.
        let mut st = FrameStack::new();
        st.add_static(2);
        st.push_frame();
        st.add_static(1);
        st.pop_frame(FrameKind::Slice {
            place: "self.int8_slice",
            var: "v",
        });
        st.pop_frame(FrameKind::Root);
        assert_eq!(
            st.into_prelude(),
            "let mut size = 2;\nsize += 1 * self.int8_slice.len();\n"
        );
    }

    #[test]
    fn static_array_folds_into_parent_bytes() {
        // [u32; 4]: folded straight into the parent's static count.
        let mut st = FrameStack::new();
        st.add_static(1);
        st.push_frame();
        st.add_static(4);
        st.pop_frame(FrameKind::Array { len: 4, var: "i" });
        st.pop_frame(FrameKind::Root);
        assert_eq!(st.into_prelude(), "let mut size = 17;\n");
    }

    #[test]
    fn dynamic_slice_becomes_a_loop() {
        // Vec<String>
        let mut st = FrameStack::new();
        st.add_static(2);
        st.push_frame();
        st.add_static(2);
        st.add_dynamic("v.len()".to_owned());
        st.pop_frame(FrameKind::Slice {
            place: "self.titles",
            var: "v",
        });
        st.pop_frame(FrameKind::Root);
        assert_eq!(
            st.into_prelude(),
            "let mut size = 2;\n\
             for v in self.titles.iter() {\n\
             size += 2;\n\
             size += v.len();\n\
             }\n"
        );
    }

    #[test]
    fn nested_frames_reverse_to_natural_order() {
        // Outer { arr1: Vec<u8>, players: Vec<Player>, arr2: Vec<i8> }
        // Player { name: String, inventory: Vec<u8>, titles: Vec<String> }
        let mut st = FrameStack::new();
        st.add_static(2);
        st.push_frame();
        st.add_static(1);
        st.pop_frame(FrameKind::Slice {
            place: "self.arr1",
            var: "v",
        });
        st.add_static(2);
        st.push_frame();
        {
            st.add_static(2);
            st.add_dynamic("v.name.len()".to_owned());
            st.add_static(2);
            st.push_frame();
            st.add_static(1);
            st.pop_frame(FrameKind::Slice {
                place: "v.inventory",
                var: "v1",
            });
            st.add_static(2);
            st.push_frame();
            st.add_static(2);
            st.add_dynamic("v1.len()".to_owned());
            st.pop_frame(FrameKind::Slice {
                place: "v.titles",
                var: "v1",
            });
        }
        st.pop_frame(FrameKind::Slice {
            place: "self.players",
            var: "v",
        });
        st.add_static(2);
        st.push_frame();
        st.add_static(1);
        st.pop_frame(FrameKind::Slice {
            place: "self.arr2",
            var: "v",
        });
        st.pop_frame(FrameKind::Root);
        assert_eq!(
            st.into_prelude(),
            "let mut size = 6;\n\
             size += 1 * self.arr1.len() + 1 * self.arr2.len();\n\
             for v in self.players.iter() {\n\
             size += 6;\n\
             size += v.name.len() + 1 * v.inventory.len();\n\
             for v1 in v.titles.iter() {\n\
             size += 2;\n\
             size += v1.len();\n\
             }\n\
             }\n"
        );
    }
}

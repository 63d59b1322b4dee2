//! # Code Generation
//!
//! Converts IR programs to ESC/P protocol bytes.

use super::ops::{Op, Program};
use crate::protocol::{commands, text};

impl Program {
    /// Compile the IR program to ESC/P bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for op in &self.ops {
            match op {
                // ===== Printer Control =====
                Op::Init => out.extend(commands::init()),
                Op::FormFeed => out.extend(commands::form_feed()),
                Op::LineBreak => out.extend(commands::cr_lf()),

                // ===== Page Geometry =====
                Op::SetMargin { side, columns } => {
                    out.extend(commands::margin(*side, *columns));
                }
                Op::SetPitch(pitch) => out.extend(text::pitch(*pitch)),
                Op::SetLineSpacing(spacing) => {
                    out.extend(commands::line_spacing(*spacing));
                }
                Op::SetJustification(justification) => {
                    out.extend(commands::justify(*justification));
                }

                // ===== Style Changes =====
                Op::SetTypeface(face) => out.extend(text::typeface(*face)),
                Op::SetStyle { style, enabled } => {
                    out.extend(text::style(*style, *enabled));
                }

                // ===== Content =====
                Op::Text(bytes) | Op::Glyphs(bytes) => out.extend_from_slice(bytes),
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::commands::{LineSpacing, MarginSide};
    use crate::protocol::text::Style;

    #[test]
    fn test_empty_program() {
        assert!(Program::new().to_bytes().is_empty());
    }

    #[test]
    fn test_bold_word() {
        let program: Program = [
            Op::SetStyle {
                style: Style::Bold,
                enabled: true,
            },
            Op::Text(b"bold".to_vec()),
            Op::SetStyle {
                style: Style::Bold,
                enabled: false,
            },
            Op::LineBreak,
        ]
        .into_iter()
        .collect();
        assert_eq!(program.to_bytes(), b"\x1bEbold\x1bF\r\n");
    }

    #[test]
    fn test_geometry() {
        let program: Program = [
            Op::SetMargin {
                side: MarginSide::Left,
                columns: 5,
            },
            Op::SetLineSpacing(LineSpacing::Per216(45)),
        ]
        .into_iter()
        .collect();
        assert_eq!(program.to_bytes(), b"\x1bl\x05\x1b3\x2d");
    }

    #[test]
    fn test_glyphs_are_plain_bytes() {
        let program: Program = [Op::Glyphs(vec![0xC9, 0xCD, 0xBB]), Op::FormFeed]
            .into_iter()
            .collect();
        assert_eq!(program.to_bytes(), vec![0xC9, 0xCD, 0xBB, 0x0C]);
    }
}

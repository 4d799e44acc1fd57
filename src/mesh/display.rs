// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt;

use crate::mesh::basic_types::HalfEdgeDataStructure;

/// `{}` prints a one-line summary, `{:#}` dumps every half-edge and the
/// anchor tables.
impl fmt::Display for HalfEdgeDataStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[HalfEdgeDataStructure #he={} #V={} #E={} #F={} chi={}]",
            self.nb_half_edges(),
            self.nb_vertices(),
            self.nb_edges(),
            self.nb_faces(),
            self.euler()
        )?;
        if !f.alternate() {
            return Ok(());
        }

        writeln!(f)?;
        for (i, he) in self.half_edges.iter().enumerate() {
            let face = match he.face {
                Some(fi) => fi.to_string(),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "  he {i}: to={} face={face} edge={} opp={} next={}",
                he.to_vertex, he.edge, he.opposite, he.next
            )?;
        }
        writeln!(f, "  vertex -> he: {:?}", self.vertex_half_edges)?;
        writeln!(f, "  face -> he: {:?}", self.face_half_edges)?;
        write!(f, "  edge -> he: {:?}", self.edge_half_edges)
    }
}

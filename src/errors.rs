//! Error types, generated by `error_chain!`.

use graph::Node;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        // An argument was outside the domain the operation accepts.
        InvalidArgument(message: String) {
            description("invalid argument")
            display("invalid argument: {}", message)
        }

        // A grid coordinate fell outside the grid.
        PositionOutOfRange(row: isize, col: isize, rows: usize, cols: usize) {
            description("grid position out of range")
            display("position ({}, {}) is outside a {}x{} grid", row, col, rows, cols)
        }

        // A vertex index was not less than the graph's vertex count.
        VertexOutOfRange(vertex: Node, count: usize) {
            description("vertex out of range")
            display("vertex {} is out of range for a graph of {} vertices", vertex, count)
        }
    }
}

use super::types::*;
use super::*;
use common::shapes::{Point, Rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    SourceOver,
    Multiply,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl DrawColor {
    pub const POINT: DrawColor = DrawColor::new(255, 255, 0, 1.0);
    pub const HEAT: DrawColor = DrawColor::new(255, 55, 55, 0.0);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

/// Primitive a canvas-like surface has to support to draw the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rectangle),
    StrokeRect {
        rect: Rectangle,
        line_width: f32,
    },
    FillRect {
        rect: Rectangle,
        color: DrawColor,
        blend: BlendMode,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: DrawColor,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepaintStats {
    pub nodes_visited: usize,
    pub nodes_repainted: usize,
}

impl QuadTree {
    /// Emits draw commands for dirty nodes only and clears their flags.
    ///
    /// Clean subtrees are skipped without being entered, so the cost follows
    /// the number of changed nodes rather than the size of the tree.
    pub fn repaint(
        &mut self,
        options: &RepaintOptions,
        commands: &mut Vec<DrawCommand>,
    ) -> RepaintStats {
        let mut stats = RepaintStats::default();
        let mut stack = std::mem::take(&mut self.repaint_stack);
        stack.clear();
        stack.push(ROOT);
        while let Some(node_index) = stack.pop() {
            stats.nodes_visited += 1;
            let node = &mut self.nodes[node_index as usize];
            if node.has_flag(FLAG_REQUIRES_REPAINT) {
                node.clear_flag(FLAG_REQUIRES_REPAINT);
                if !node.is_leaf() {
                    // Clearing this node's area wipes whatever the children drew.
                    node.set_flag(FLAG_CHILD_REQUIRES_REPAINT);
                    let children = node.children;
                    for child in children {
                        self.nodes[child as usize].set_flag(FLAG_REQUIRES_REPAINT);
                    }
                }
                stats.nodes_repainted += 1;
                self.emit_node(node_index, options, commands);
            }
            let node = &mut self.nodes[node_index as usize];
            if node.has_flag(FLAG_CHILD_REQUIRES_REPAINT) {
                node.clear_flag(FLAG_CHILD_REQUIRES_REPAINT);
                if !node.is_leaf() {
                    stack.extend(node.children.iter().rev().copied());
                }
            }
        }
        self.repaint_stack = stack;
        stats
    }

    /// Emits every node regardless of its flags. Flags are left untouched.
    pub fn draw_all(&self, options: &RepaintOptions, commands: &mut Vec<DrawCommand>) -> usize {
        let mut visited = 0usize;
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(node_index) = stack.pop() {
            visited += 1;
            self.emit_node(node_index, options, commands);
            let node = &self.nodes[node_index as usize];
            if !node.is_leaf() {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        visited
    }

    /// Forces the next [`QuadTree::repaint`] to redraw everything.
    pub fn mark_all_dirty(&mut self) {
        for node in self.nodes.iter_mut() {
            node.set_flag(FLAG_REQUIRES_REPAINT);
            if !node.is_leaf() {
                node.set_flag(FLAG_CHILD_REQUIRES_REPAINT);
            }
        }
    }

    pub fn dirty_node_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| {
                node.has_flag(FLAG_REQUIRES_REPAINT) || node.has_flag(FLAG_CHILD_REQUIRES_REPAINT)
            })
            .count()
    }

    fn emit_node(&self, node_index: u32, options: &RepaintOptions, commands: &mut Vec<DrawCommand>) {
        let node = &self.nodes[node_index as usize];
        let rect = node.boundary;
        commands.push(DrawCommand::ClearRect(rect));
        if options.draw_bbox {
            commands.push(DrawCommand::StrokeRect {
                rect,
                line_width: options.outline_thickness,
            });
        }
        if options.draw_heat_map {
            let alpha = (node.depth as f32 * options.heat_map_alpha_step).min(1.0);
            commands.push(DrawCommand::FillRect {
                rect,
                color: DrawColor::HEAT.with_alpha(alpha),
                blend: BlendMode::Multiply,
            });
        }
        if options.draw_points {
            commands.extend(node.points.iter().map(|&center| DrawCommand::FillCircle {
                center,
                radius: options.point_radius,
                color: DrawColor::POINT,
            }));
        }
    }
}

//! Command and query execution against a Canvas.
//!
//! This module connects the abstract Command/Query types to the actual
//! Canvas implementation, executing operations and returning results.

use crate::{
    AnimationInfo, ColorInfo, Command, CommandResult, FillInfo, OrderEntry, Query, QueryResult,
    ShapeInfo, ShapeQuery, StrokeInfo, Target,
};
use canvas::{Canvas, EventSource, Modifiers, PointerEvent, Timeline};
use glam::Vec2;
use node::{
    AnimationDescriptor, CanvasDelta, CanvasPoint, Fill, HandleId, Keyframe, Shape, ShapeId,
    Stroke,
};

/// Execute a command against a canvas.
pub fn execute_command(canvas: &mut Canvas, command: Command) -> CommandResult {
    log::debug!("execute {command:?}");
    let result = execute_command_inner(canvas, command);
    if let CommandResult::Error { message } = &result {
        log::warn!("command failed: {message}");
    }
    result
}

fn execute_command_inner(canvas: &mut Canvas, command: Command) -> CommandResult {
    match command {
        Command::CreateShape {
            position,
            size,
            identifier,
            fill,
            stroke,
            opacity,
        } => {
            let mut shape = Shape::rectangle(position, size);
            if let Some(identifier) = identifier {
                shape = shape.with_identifier(identifier);
            }
            if let Some(fill) = fill {
                shape = shape.with_fill(fill.to_srgba());
            }
            if let Some(stroke) = stroke {
                shape = shape.with_stroke(stroke.color.to_srgba(), stroke.width);
            }
            if let Some(opacity) = opacity {
                shape = shape.with_opacity(opacity.clamp(0.0, 1.0));
            }
            let id = canvas.add_shape(shape);
            CommandResult::created(vec![id])
        }

        Command::AddDecoration => {
            canvas.add_decoration();
            CommandResult::success()
        }

        Command::Delete { target } => {
            let ids = match resolve_target(canvas, &target) {
                Ok(ids) => ids,
                Err(message) => return CommandResult::error(message),
            };
            let deleted: Vec<_> = ids
                .into_iter()
                .filter(|id| canvas.remove_shape(*id))
                .collect();
            CommandResult::deleted(deleted)
        }

        Command::SetIdentifier { shape, identifier } => {
            if canvas.set_identifier(shape, identifier) {
                CommandResult::modified(vec![shape])
            } else {
                CommandResult::error(not_found(shape))
            }
        }

        Command::Select {
            target,
            add_to_selection,
        } => {
            let ids = match resolve_target(canvas, &target) {
                Ok(ids) => ids,
                Err(message) => return CommandResult::error(message),
            };
            if !add_to_selection {
                canvas.clear_selection();
            }
            for id in ids {
                canvas.select(id, true);
            }
            CommandResult::success()
        }

        Command::ClearSelection => {
            canvas.clear_selection();
            CommandResult::success()
        }

        Command::SelectAll => {
            for id in canvas.shape_order() {
                canvas.select(id, true);
            }
            CommandResult::success()
        }

        Command::SetRect {
            target,
            x,
            y,
            width,
            height,
        } => for_each_target(canvas, &target, |canvas, id| {
            canvas.set_rect(id, x, y, width, height)
        }),

        Command::SetWidth { target, width } => {
            for_each_target(canvas, &target, |canvas, id| canvas.set_width(id, width))
        }

        Command::SetHeight { target, height } => {
            for_each_target(canvas, &target, |canvas, id| canvas.set_height(id, height))
        }

        Command::Move { target, delta } => for_each_target(canvas, &target, |canvas, id| {
            canvas.move_shape(id, CanvasDelta(delta))
        }),

        Command::SetPosition { target, position } => {
            for_each_target(canvas, &target, |canvas, id| {
                canvas.set_position(id, CanvasPoint(position))
            })
        }

        Command::DragHandle {
            shape,
            handle,
            from,
            to,
            lock_aspect,
        } => drag_handle(canvas, HandleId::new(shape, handle), from, to, lock_aspect),

        Command::SetFill { target, fill } => {
            let fill = fill.map(|f| Fill::new(f.to_srgba()));
            for_each_target(canvas, &target, |canvas, id| canvas.set_fill(id, fill))
        }

        Command::SetStroke { target, stroke } => {
            let stroke = stroke.map(|s| Stroke::new(s.color.to_srgba(), s.width));
            for_each_target(canvas, &target, |canvas, id| canvas.set_stroke(id, stroke))
        }

        // Targets are visited in the stacking order that keeps their
        // relative order intact.
        Command::Raise { target } => reorder(canvas, &target, false, Canvas::raise),
        Command::Lower { target } => reorder(canvas, &target, true, Canvas::lower),
        Command::BringToFront { target } => reorder(canvas, &target, true, Canvas::bring_to_front),
        Command::SendToBack { target } => reorder(canvas, &target, false, Canvas::send_to_back),

        Command::AddKeyframe {
            shape,
            property,
            time,
            value,
        } => {
            if canvas.add_keyframe(shape, Keyframe::new(property, time, value)) {
                CommandResult::modified(vec![shape])
            } else {
                CommandResult::error(not_found(shape))
            }
        }

        Command::AddAnimation {
            shape,
            property,
            start_value,
            end_value,
            min,
            max,
        } => {
            let mut animation = AnimationDescriptor::new(property, start_value, end_value);
            if let Some(min) = min {
                animation.min = min;
            }
            if let Some(max) = max {
                animation.max = max;
            }
            if animation.min > animation.max {
                return CommandResult::error(format!(
                    "Animation bounds are inverted: min {} > max {}",
                    animation.min, animation.max
                ));
            }
            if canvas.add_animation(shape, animation) {
                CommandResult::modified(vec![shape])
            } else {
                CommandResult::error(not_found(shape))
            }
        }

        Command::RequestAnimation { target, property } => {
            for_each_target(canvas, &target, |canvas, id| {
                canvas.request_animation(id, property)
            })
        }

        Command::AttachTimeline { playhead } => {
            canvas.attach_timeline(Timeline::new(playhead));
            CommandResult::success()
        }

        Command::DetachTimeline => {
            canvas.detach_timeline();
            CommandResult::success()
        }

        Command::SetPlayhead { time } => {
            if canvas.set_playhead(time) {
                CommandResult::success()
            } else {
                CommandResult::error("No timeline attached")
            }
        }

        Command::Batch { commands } => {
            let mut all_created = Vec::new();
            let mut all_modified = Vec::new();
            let mut all_deleted = Vec::new();

            for cmd in commands {
                match execute_command_inner(canvas, cmd) {
                    CommandResult::Success {
                        created,
                        modified,
                        deleted,
                    } => {
                        all_created.extend(created);
                        all_modified.extend(modified);
                        all_deleted.extend(deleted);
                    }
                    CommandResult::Error { message } => {
                        return CommandResult::error(format!("Batch failed: {}", message));
                    }
                }
            }

            CommandResult::Success {
                created: all_created,
                modified: all_modified,
                deleted: all_deleted,
            }
        }
    }
}

/// Replay a handle drag as press, move and release on the handle.
///
/// Both pointer positions are mapped into the handle's local space as it sits
/// at press time, so the drag delta is simply `from - to`.
fn drag_handle(
    canvas: &mut Canvas,
    handle: HandleId,
    from: Vec2,
    to: Vec2,
    lock_aspect: bool,
) -> CommandResult {
    if canvas.shape(handle.shape).is_none() {
        return CommandResult::error(not_found(handle.shape));
    }
    let (Some(down), Some(current)) = (
        canvas.handle_local_point(handle, CanvasPoint(from)),
        canvas.handle_local_point(handle, CanvasPoint(to)),
    ) else {
        return CommandResult::error(format!(
            "Shape {} is not selected; it has no resize handles",
            handle.shape
        ));
    };

    let source = EventSource::ResizeHandle(handle);
    let modifiers = Modifiers { lock_aspect };
    let steps = [
        PointerEvent::Press { pos: down },
        PointerEvent::Move { pos: current },
        PointerEvent::Release { pos: current },
    ];
    for event in steps {
        if !canvas.intercept(source, event, modifiers) {
            return CommandResult::error(format!(
                "Handle {} of shape {} ignored {:?}",
                handle.role, handle.shape, event
            ));
        }
    }
    CommandResult::modified(vec![handle.shape])
}

/// Apply `op` to every targeted shape, reporting the ones it changed.
fn for_each_target(
    canvas: &mut Canvas,
    target: &Target,
    mut op: impl FnMut(&mut Canvas, ShapeId) -> bool,
) -> CommandResult {
    match resolve_target(canvas, target) {
        Ok(ids) => {
            let modified = ids.into_iter().filter(|id| op(canvas, *id)).collect();
            CommandResult::modified(modified)
        }
        Err(message) => CommandResult::error(message),
    }
}

fn reorder(
    canvas: &mut Canvas,
    target: &Target,
    back_first: bool,
    op: fn(&mut Canvas, ShapeId) -> bool,
) -> CommandResult {
    let ids = match resolve_target(canvas, target) {
        Ok(ids) => ids,
        Err(message) => return CommandResult::error(message),
    };
    let mut ordered: Vec<ShapeId> = canvas
        .shape_order()
        .into_iter()
        .filter(|id| ids.contains(id))
        .collect();
    if back_first {
        ordered.reverse();
    }
    let modified = ordered.into_iter().filter(|id| op(canvas, *id)).collect();
    CommandResult::modified(modified)
}

fn not_found(id: ShapeId) -> String {
    format!("Shape not found: {}", id.to_uuid_string())
}

/// Execute a query against a canvas.
pub fn execute_query(canvas: &Canvas, query: Query) -> QueryResult {
    match query {
        Query::GetSelection => QueryResult::Selection {
            ids: selected_in_order(canvas),
        },

        Query::GetAllShapes => QueryResult::Shapes {
            shapes: canvas.shapes().map(|s| shape_to_info(canvas, s)).collect(),
        },

        Query::GetShapes { target } => match resolve_target(canvas, &target) {
            Ok(ids) => QueryResult::Shapes {
                shapes: canvas
                    .shapes()
                    .filter(|s| ids.contains(&s.id))
                    .map(|s| shape_to_info(canvas, s))
                    .collect(),
            },
            Err(message) => QueryResult::Error { message },
        },

        Query::GetShape { id } => QueryResult::Shape {
            shape: canvas.shape(id).map(|s| shape_to_info(canvas, s)),
        },

        Query::GetOrder => QueryResult::Order {
            items: canvas.items().iter().map(OrderEntry::from).collect(),
        },

        Query::GetKeyframes { id } => match canvas.shape(id) {
            Some(shape) => QueryResult::Keyframes {
                keyframes: shape.keyframes().to_vec(),
            },
            None => QueryResult::Error {
                message: not_found(id),
            },
        },

        Query::GetAnimations { id } => match canvas.shape(id) {
            Some(shape) => QueryResult::Animations {
                animations: (0..shape.animation_count())
                    .filter_map(|i| shape.animation(i))
                    .map(|a| AnimationInfo {
                        property: a.property.clone(),
                        start_value: a.start_value,
                        end_value: a.end_value,
                        min: a.min,
                        max: a.max,
                    })
                    .collect(),
            },
            None => QueryResult::Error {
                message: not_found(id),
            },
        },

        Query::GetTimeline => QueryResult::Timeline {
            playhead: canvas.playhead(),
        },

        Query::GetShapeCount => QueryResult::Count {
            count: canvas.shape_count(),
        },
    }
}

fn selected_in_order(canvas: &Canvas) -> Vec<ShapeId> {
    canvas
        .shape_order()
        .into_iter()
        .filter(|id| canvas.is_selected(*id))
        .collect()
}

/// Resolve a target to a list of shape IDs, front to back for the implicit
/// targets. Explicit IDs must name existing shapes.
fn resolve_target(canvas: &Canvas, target: &Target) -> Result<Vec<ShapeId>, String> {
    let ids = match target {
        Target::Selection => selected_in_order(canvas),
        Target::Shape(id) => vec![*id],
        Target::Shapes(ids) => ids.clone(),
        Target::All => canvas.shape_order(),
        Target::Query(query) => resolve_shape_query(canvas, query),
    };
    match ids.iter().find(|id| canvas.shape(**id).is_none()) {
        Some(missing) => Err(not_found(*missing)),
        None => Ok(ids),
    }
}

/// Resolve a shape query to matching IDs.
fn resolve_shape_query(canvas: &Canvas, query: &ShapeQuery) -> Vec<ShapeId> {
    match query {
        ShapeQuery::ByIdentifier(name) => canvas
            .shapes()
            .filter(|s| s.identifier() == name)
            .map(|s| s.id)
            .collect(),
        ShapeQuery::InBounds {
            x,
            y,
            width,
            height,
        } => {
            let bounds_min = Vec2::new(*x, *y);
            let bounds_max = Vec2::new(x + width, y + height);
            canvas
                .shapes()
                .filter(|s| {
                    let (shape_min, shape_max) = s.bounds();
                    shape_min.x() < bounds_max.x
                        && shape_max.x() > bounds_min.x
                        && shape_min.y() < bounds_max.y
                        && shape_max.y() > bounds_min.y
                })
                .map(|s| s.id)
                .collect()
        }
    }
}

/// Convert a Shape to ShapeInfo for query results.
fn shape_to_info(canvas: &Canvas, shape: &Shape) -> ShapeInfo {
    ShapeInfo {
        id: shape.id,
        identifier: shape.identifier().to_string(),
        position: shape.position.0,
        size: shape.size().0,
        opacity: shape.opacity,
        fill: shape.fill().map(|f| FillInfo {
            color: ColorInfo::from(f.color),
        }),
        stroke: shape.stroke().map(|s| StrokeInfo {
            color: ColorInfo::from(s.color),
            width: s.width,
        }),
        selected: canvas.is_selected(shape.id),
        animation_count: shape.animation_count(),
        keyframe_count: shape.keyframes().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorValue, HexColor};
    use canvas::{CanvasConfig, CanvasEvent, CanvasItem};
    use node::{AnimatedProperty, ResizeHandle};

    fn create(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32) -> ShapeId {
        let result = execute_command(
            canvas,
            Command::CreateShape {
                position: Vec2::new(x, y),
                size: Vec2::new(w, h),
                identifier: None,
                fill: None,
                stroke: None,
                opacity: None,
            },
        );
        match result {
            CommandResult::Success { created, .. } => created[0],
            CommandResult::Error { message } => panic!("create failed: {message}"),
        }
    }

    fn select(canvas: &mut Canvas, id: ShapeId) {
        let result = execute_command(
            canvas,
            Command::Select {
                target: Target::Shape(id),
                add_to_selection: false,
            },
        );
        assert!(!result.is_error());
    }

    fn drag(canvas: &mut Canvas, id: ShapeId, handle: ResizeHandle, from: Vec2, to: Vec2) -> CommandResult {
        execute_command(
            canvas,
            Command::DragHandle {
                shape: id,
                handle,
                from,
                to,
                lock_aspect: false,
            },
        )
    }

    #[test]
    fn test_create_shape_with_style() {
        let mut canvas = Canvas::default();
        let result = execute_command(
            &mut canvas,
            Command::CreateShape {
                position: Vec2::new(10.0, 20.0),
                size: Vec2::new(100.0, 50.0),
                identifier: Some("logo".into()),
                fill: Some(ColorValue::Hex(HexColor { r: 255, g: 0, b: 0 })),
                stroke: None,
                opacity: Some(0.5),
            },
        );
        let CommandResult::Success { created, .. } = result else {
            panic!("expected success");
        };
        let shape = canvas.shape(created[0]).unwrap();
        assert_eq!(shape.identifier(), "logo");
        assert_eq!(shape.opacity, 0.5);
        assert_eq!(shape.fill().unwrap().color.red, 1.0);
        assert!(shape.stroke().is_some());
    }

    #[test]
    fn test_drag_top_left_handle() {
        let mut canvas = Canvas::default();
        let id = create(&mut canvas, 100.0, 100.0, 200.0, 100.0);
        select(&mut canvas, id);
        canvas.drain_events();

        let result = drag(
            &mut canvas,
            id,
            ResizeHandle::TopLeft,
            Vec2::new(100.0, 100.0),
            Vec2::new(80.0, 90.0),
        );
        assert!(!result.is_error());

        let shape = canvas.shape(id).unwrap();
        assert_eq!(shape.size().0, Vec2::new(220.0, 110.0));
        assert_eq!(shape.position.0, Vec2::new(80.0, 90.0));
        assert!(canvas.drain_events().contains(&CanvasEvent::PositionChanged {
            shape: id,
            x: 80.0,
            y: 90.0
        }));
    }

    #[test]
    fn test_drag_respects_configured_floor() {
        let mut canvas = Canvas::new(CanvasConfig {
            min_size: 10.0,
            ..CanvasConfig::default()
        });
        let id = create(&mut canvas, 0.0, 0.0, 100.0, 100.0);
        select(&mut canvas, id);
        drag(
            &mut canvas,
            id,
            ResizeHandle::BottomRight,
            Vec2::new(100.0, 100.0),
            Vec2::new(-50.0, 50.0),
        );
        assert_eq!(canvas.shape(id).unwrap().size().0, Vec2::new(10.0, 50.0));
    }

    #[test]
    fn test_drag_requires_selection() {
        let mut canvas = Canvas::default();
        let id = create(&mut canvas, 0.0, 0.0, 100.0, 100.0);
        let result = drag(&mut canvas, id, ResizeHandle::Right, Vec2::ZERO, Vec2::ONE);
        assert!(result.is_error());
        assert_eq!(canvas.shape(id).unwrap().size().0, Vec2::new(100.0, 100.0));

        let missing = drag(
            &mut canvas,
            ShapeId::from_u128(42),
            ResizeHandle::Right,
            Vec2::ZERO,
            Vec2::ONE,
        );
        assert!(missing.is_error());
    }

    #[test]
    fn test_unknown_shape_in_target_is_an_error() {
        let mut canvas = Canvas::default();
        create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        let result = execute_command(
            &mut canvas,
            Command::SetWidth {
                target: Target::Shape(ShapeId::from_u128(7)),
                width: 80.0,
            },
        );
        assert!(result.is_error());
    }

    #[test]
    fn test_bring_to_front_keeps_relative_order() {
        let mut canvas = Canvas::default();
        let a = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        let b = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        let c = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        let d = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        assert_eq!(canvas.shape_order(), vec![d, c, b, a]);

        execute_command(
            &mut canvas,
            Command::BringToFront {
                target: Target::Shapes(vec![a, c]),
            },
        );
        assert_eq!(canvas.shape_order(), vec![c, a, d, b]);

        execute_command(
            &mut canvas,
            Command::SendToBack {
                target: Target::Shapes(vec![c, a]),
            },
        );
        assert_eq!(canvas.shape_order(), vec![d, b, c, a]);
    }

    #[test]
    fn test_raise_selection() {
        let mut canvas = Canvas::default();
        let a = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        let b = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        select(&mut canvas, a);
        let result = execute_command(&mut canvas, Command::Raise { target: Target::Selection });
        match result {
            CommandResult::Success { modified, .. } => assert_eq!(modified, vec![a]),
            CommandResult::Error { message } => panic!("raise failed: {message}"),
        }
        assert_eq!(canvas.shape_order(), vec![a, b]);
    }

    #[test]
    fn test_set_playhead_needs_timeline() {
        let mut canvas = Canvas::default();
        assert!(execute_command(&mut canvas, Command::SetPlayhead { time: 5 }).is_error());
        execute_command(&mut canvas, Command::AttachTimeline { playhead: 0 });
        assert!(!execute_command(&mut canvas, Command::SetPlayhead { time: 5 }).is_error());
        assert!(matches!(
            execute_query(&canvas, Query::GetTimeline),
            QueryResult::Timeline { playhead: Some(5) }
        ));
        execute_command(&mut canvas, Command::DetachTimeline);
        assert!(matches!(
            execute_query(&canvas, Query::GetTimeline),
            QueryResult::Timeline { playhead: None }
        ));
    }

    #[test]
    fn test_move_selected_shape_updates_keyframes() {
        let mut canvas = Canvas::default();
        let id = create(&mut canvas, 10.0, 10.0, 50.0, 50.0);
        let result = execute_command(
            &mut canvas,
            Command::Batch {
                commands: vec![
                    Command::AddKeyframe {
                        shape: id,
                        property: "left".into(),
                        time: 0,
                        value: 10.0,
                    },
                    Command::AddKeyframe {
                        shape: id,
                        property: "left".into(),
                        time: 10,
                        value: 200.0,
                    },
                    Command::AttachTimeline { playhead: 4 },
                    Command::Select {
                        target: Target::Shape(id),
                        add_to_selection: false,
                    },
                    Command::Move {
                        target: Target::Selection,
                        delta: Vec2::new(15.0, 0.0),
                    },
                ],
            },
        );
        assert!(!result.is_error());

        let QueryResult::Keyframes { keyframes } = execute_query(&canvas, Query::GetKeyframes { id })
        else {
            panic!("expected keyframes");
        };
        assert_eq!(keyframes[0], Keyframe::new("left", 0, 25.0));
        assert_eq!(keyframes[1], Keyframe::new("left", 10, 200.0));
    }

    #[test]
    fn test_batch_stops_at_first_error() {
        let mut canvas = Canvas::default();
        let result = execute_command(
            &mut canvas,
            Command::Batch {
                commands: vec![
                    Command::CreateShape {
                        position: Vec2::ZERO,
                        size: Vec2::splat(50.0),
                        identifier: None,
                        fill: None,
                        stroke: None,
                        opacity: None,
                    },
                    Command::SetPlayhead { time: 1 },
                    Command::AddDecoration,
                ],
            },
        );
        let CommandResult::Error { message } = result else {
            panic!("expected error");
        };
        assert!(message.starts_with("Batch failed"));
        assert_eq!(canvas.shape_count(), 1);
        assert_eq!(canvas.items().len(), 1);
    }

    #[test]
    fn test_request_animation_emits_event() {
        let mut canvas = Canvas::default();
        let id = create(&mut canvas, 30.0, 40.0, 50.0, 50.0);
        canvas.drain_events();
        execute_command(
            &mut canvas,
            Command::RequestAnimation {
                target: Target::Shape(id),
                property: AnimatedProperty::Top,
            },
        );
        assert_eq!(
            canvas.drain_events(),
            vec![CanvasEvent::AddAnimationRequested {
                shape: id,
                property: AnimatedProperty::Top,
                current_value: 40.0,
                min: -10_000.0,
                max: 10_000.0
            }]
        );
    }

    #[test]
    fn test_add_animation_rejects_inverted_bounds() {
        let mut canvas = Canvas::default();
        let id = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        let result = execute_command(
            &mut canvas,
            Command::AddAnimation {
                shape: id,
                property: "opacity".into(),
                start_value: 1.0,
                end_value: 0.0,
                min: Some(1.0),
                max: Some(0.0),
            },
        );
        assert!(result.is_error());

        execute_command(
            &mut canvas,
            Command::AddAnimation {
                shape: id,
                property: "opacity".into(),
                start_value: 1.0,
                end_value: 0.0,
                min: Some(0.0),
                max: Some(1.0),
            },
        );
        let QueryResult::Animations { animations } =
            execute_query(&canvas, Query::GetAnimations { id })
        else {
            panic!("expected animations");
        };
        assert_eq!(animations.len(), 1);
        assert_eq!(animations[0].property, "opacity");
    }

    #[test]
    fn test_queries_by_identifier_and_bounds() {
        let mut canvas = Canvas::default();
        let a = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        let b = create(&mut canvas, 200.0, 200.0, 50.0, 50.0);
        execute_command(
            &mut canvas,
            Command::SetIdentifier {
                shape: b,
                identifier: "badge".into(),
            },
        );

        let QueryResult::Shapes { shapes } = execute_query(
            &canvas,
            Query::GetShapes {
                target: Target::Query(ShapeQuery::ByIdentifier("badge".into())),
            },
        ) else {
            panic!("expected shapes");
        };
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].id, b);

        let QueryResult::Shapes { shapes } = execute_query(
            &canvas,
            Query::GetShapes {
                target: Target::Query(ShapeQuery::InBounds {
                    x: -10.0,
                    y: -10.0,
                    width: 30.0,
                    height: 30.0,
                }),
            },
        ) else {
            panic!("expected shapes");
        };
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].id, a);
    }

    #[test]
    fn test_order_query_includes_decorations() {
        let mut canvas = Canvas::default();
        let a = create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        execute_command(&mut canvas, Command::AddDecoration);
        assert!(matches!(canvas.items()[0], CanvasItem::Decoration(_)));
        let QueryResult::Order { items } = execute_query(&canvas, Query::GetOrder) else {
            panic!("expected order");
        };
        assert_eq!(items, vec![OrderEntry::Decoration, OrderEntry::Shape { id: a }]);
    }

    #[test]
    fn test_select_all_and_delete_selection() {
        let mut canvas = Canvas::default();
        create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        create(&mut canvas, 0.0, 0.0, 50.0, 50.0);
        execute_command(&mut canvas, Command::SelectAll);
        let QueryResult::Selection { ids } = execute_query(&canvas, Query::GetSelection) else {
            panic!("expected selection");
        };
        assert_eq!(ids.len(), 2);

        let result = execute_command(&mut canvas, Command::Delete { target: Target::Selection });
        match result {
            CommandResult::Success { deleted, .. } => assert_eq!(deleted.len(), 2),
            CommandResult::Error { message } => panic!("delete failed: {message}"),
        }
        assert!(matches!(
            execute_query(&canvas, Query::GetShapeCount),
            QueryResult::Count { count: 0 }
        ));
    }
}

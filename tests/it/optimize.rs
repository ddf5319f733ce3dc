use forge_wasm::ir::{Func, Instr, Literal, Module};
use forge_wasm::types::ValType;
use forge_wasm::{optimize, optimize_func, OptLevel, OptimizeOptions};

fn at(level: OptLevel) -> OptimizeOptions {
    OptimizeOptions {
        level,
        ..OptimizeOptions::default()
    }
}

fn body_func(body: Vec<Instr>) -> Func {
    Func::new("k").local("res", ValType::I32).body(body)
}

#[test]
fn level_zero_is_the_identity() {
    let module = Module::new().func(body_func(vec![Instr::local_set(
        "res",
        Instr::i32_add(Instr::i32_const(2), Instr::i32_const(3)),
    )]));
    assert_eq!(optimize(&module, &at(OptLevel::O0)), module);
}

#[test]
fn folds_constant_addition() {
    let func = body_func(vec![Instr::local_set(
        "res",
        Instr::i32_add(Instr::i32_const(2), Instr::i32_const(3)),
    )]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(
        optimized.body,
        vec![Instr::local_set("res", Instr::i32_const(5))]
    );
}

#[test]
fn folds_nested_expressions_to_a_fixed_point() {
    let func = body_func(vec![Instr::local_set(
        "res",
        Instr::i32_mul(
            Instr::i32_add(Instr::i32_const(2), Instr::i32_const(3)),
            Instr::i32_sub(Instr::i32_const(10), Instr::i32_const(6)),
        ),
    )]);
    let optimized = optimize_func(&func, &at(OptLevel::O1));
    assert_eq!(
        optimized.body,
        vec![Instr::local_set("res", Instr::i32_const(20))]
    );
}

#[test]
fn integer_arithmetic_wraps() {
    let func = body_func(vec![Instr::local_set(
        "res",
        Instr::i32_mul(Instr::i32_const(i32::MAX), Instr::i32_const(2)),
    )]);
    let optimized = optimize_func(&func, &at(OptLevel::O1));
    assert_eq!(
        optimized.body,
        vec![Instr::local_set("res", Instr::i32_const(-2))]
    );
}

#[test]
fn shifts_and_division_fold() {
    let func = body_func(vec![
        Instr::drop_(Instr::i32_shl(Instr::i32_const(1), Instr::i32_const(4))),
        Instr::drop_(Instr::i32_shr_s(Instr::i32_const(-32), Instr::i32_const(2))),
        Instr::drop_(Instr::i32_div_s(Instr::i32_const(9), Instr::i32_const(3))),
    ]);
    let optimized = optimize_func(&func, &at(OptLevel::O1));
    assert_eq!(
        optimized.body,
        vec![
            Instr::drop_(Instr::i32_const(16)),
            Instr::drop_(Instr::i32_const(-8)),
            Instr::drop_(Instr::i32_const(3)),
        ]
    );
}

#[test]
fn division_by_zero_is_left_unfolded() {
    let func = body_func(vec![Instr::drop_(Instr::i32_div_s(
        Instr::i32_const(1),
        Instr::i32_const(0),
    ))]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(optimized, func);
}

#[test]
fn float_arithmetic_folds() {
    let func = body_func(vec![Instr::drop_(Instr::f32_add(
        Instr::f32_const(1.5),
        Instr::f32_const(2.25),
    ))]);
    let optimized = optimize_func(&func, &at(OptLevel::O1));
    assert_eq!(
        optimized.body,
        vec![Instr::drop_(Instr::f32_const(3.75))]
    );
}

#[test]
fn peephole_identities() {
    let x = || Instr::local_get("res");
    let func = body_func(vec![
        Instr::drop_(Instr::i32_add(x(), Instr::i32_const(0))),
        Instr::drop_(Instr::i32_add(Instr::i32_const(0), x())),
        Instr::drop_(Instr::i32_sub(x(), Instr::i32_const(0))),
        Instr::drop_(Instr::i32_shl(x(), Instr::i32_const(0))),
        Instr::drop_(Instr::i32_shr_s(x(), Instr::i32_const(0))),
        Instr::drop_(Instr::i32_mul(x(), Instr::i32_const(1))),
        Instr::drop_(Instr::i32_mul(Instr::i32_const(1), x())),
        Instr::drop_(Instr::f32_add(Instr::local_get("res"), Instr::f32_const(-0.0))),
    ]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(
        optimized.body,
        vec![
            Instr::drop_(x()),
            Instr::drop_(x()),
            Instr::drop_(x()),
            Instr::drop_(x()),
            Instr::drop_(x()),
            Instr::drop_(x()),
            Instr::drop_(x()),
            Instr::drop_(x()),
        ]
    );
}

#[test]
fn integer_multiply_by_zero_collapses() {
    let func = body_func(vec![Instr::drop_(Instr::i32_mul(
        Instr::local_get("res"),
        Instr::i32_const(0),
    ))]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(
        optimized.body,
        vec![Instr::drop_(Instr::i32_const(0))]
    );
}

#[test]
fn float_multiply_by_zero_is_untouched() {
    // NaN and infinity make x * 0.0 observable; the peephole must not fire.
    let func = body_func(vec![Instr::drop_(Instr::f32_mul(
        Instr::local_get("res"),
        Instr::f32_const(0.0),
    ))]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(optimized, func);
}

#[test]
fn peephole_needs_level_two() {
    let func = body_func(vec![Instr::drop_(Instr::i32_add(
        Instr::local_get("res"),
        Instr::i32_const(0),
    ))]);
    assert_eq!(optimize_func(&func, &at(OptLevel::O1)), func);
}

#[test]
fn code_after_a_terminator_is_dropped() {
    let func = body_func(vec![
        Instr::ret(Vec::new()),
        Instr::drop_(Instr::i32_const(1)),
        Instr::nop(),
    ]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(optimized.body, vec![Instr::ret(Vec::new())]);
}

#[test]
fn terminators_truncate_inside_blocks() {
    let func = body_func(vec![Instr::block(
        "OUT",
        vec![
            Instr::br("OUT"),
            Instr::nop(),
            Instr::nop(),
        ],
    )]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(
        optimized.body,
        vec![Instr::block("OUT", vec![Instr::br("OUT")])]
    );
}

#[test]
fn br_if_is_not_a_terminator() {
    let func = body_func(vec![Instr::block(
        "OUT",
        vec![
            Instr::br_if("OUT", Instr::i32_const(1)),
            Instr::nop(),
        ],
    )]);
    let optimized = optimize_func(&func, &at(OptLevel::O2));
    assert_eq!(optimized, func);
}

#[test]
fn optimize_is_idempotent() {
    let func = body_func(vec![
        Instr::local_set(
            "res",
            Instr::i32_add(
                Instr::i32_mul(Instr::i32_const(6), Instr::i32_const(7)),
                Instr::i32_const(0),
            ),
        ),
        Instr::ret(vec![Instr::local_get("res")]),
        Instr::nop(),
    ]);
    for level in [OptLevel::O1, OptLevel::O2, OptLevel::O3] {
        let once = optimize_func(&func, &at(level));
        let twice = optimize_func(&once, &at(level));
        assert_eq!(once, twice, "level {level:?}");
    }
}

fn counted_loop() -> Func {
    Func::new("k")
        .param("n", ValType::I32)
        .local("i", ValType::I32)
        .local("res", ValType::I32)
        .body(vec![Instr::block(
            "OUT",
            vec![Instr::loop_(
                "TOP",
                vec![
                    Instr::br_if(
                        "OUT",
                        Instr::i32_gt_s(Instr::local_get("i"), Instr::local_get("n")),
                    ),
                    Instr::local_set(
                        "res",
                        Instr::i32_mul(Instr::local_get("res"), Instr::local_get("i")),
                    ),
                    Instr::local_set(
                        "i",
                        Instr::i32_add(Instr::local_get("i"), Instr::i32_const(1)),
                    ),
                    Instr::br("TOP"),
                ],
            )],
        )])
}

fn loop_body(func: &Func) -> &[Instr] {
    match &func.body[0] {
        Instr::Block { body, .. } => match &body[0] {
            Instr::Loop { body, .. } => body,
            other => panic!("expected loop, got {other:?}"),
        },
        other => panic!("expected block, got {other:?}"),
    }
}

#[test]
fn counted_loops_survive_below_level_three() {
    let func = counted_loop();
    assert_eq!(optimize_func(&func, &at(OptLevel::O2)), func);
}

#[test]
fn unroll_by_four() {
    let func = counted_loop();
    let optimized = optimize_func(
        &func,
        &OptimizeOptions {
            level: OptLevel::O3,
            unroll_factor: 4,
        },
    );
    let body = loop_body(&optimized);

    // br_if, then four body copies with an increment between consecutive
    // copies and one final increment before the back edge.
    assert!(matches!(body[0], Instr::BrIf { .. }));
    assert!(matches!(body[body.len() - 1], Instr::Br { .. }));

    let copies = body
        .iter()
        .filter(|node| matches!(node, Instr::LocalSet { local, .. } if local == "res"))
        .count();
    let increments = body
        .iter()
        .filter(|node| matches!(node, Instr::LocalSet { local, .. } if local == "i"))
        .count();
    assert_eq!(copies, 4);
    assert_eq!(increments, 4);

    // br_if; res; [i; res] x3; i; br
    assert_eq!(body.len(), 10);
}

#[test]
fn unroll_interleaves_increments() {
    let func = counted_loop();
    let optimized = optimize_func(
        &func,
        &OptimizeOptions {
            level: OptLevel::O3,
            unroll_factor: 2,
        },
    );
    let body = loop_body(&optimized);
    let shape: Vec<&str> = body
        .iter()
        .map(|node| match node {
            Instr::BrIf { .. } => "check",
            Instr::LocalSet { local, .. } if local == "i" => "inc",
            Instr::LocalSet { .. } => "body",
            Instr::Br { .. } => "back",
            other => panic!("unexpected node {other:?}"),
        })
        .collect();
    assert_eq!(shape, ["check", "body", "inc", "body", "inc", "back"]);
}

#[test]
fn loops_of_other_shapes_are_not_unrolled() {
    // No increment before the back edge: not the counted-loop shape.
    let func = body_func(vec![Instr::loop_(
        "TOP",
        vec![
            Instr::br_if("TOP", Instr::i32_const(1)),
            Instr::nop(),
            Instr::nop(),
            Instr::br("TOP"),
        ],
    )]);
    let optimized = optimize_func(&func, &at(OptLevel::O3));
    assert_eq!(optimized, func);
}

#[test]
fn unroll_then_fold_simplifies_inserted_arithmetic() {
    // A loop whose body is pure constant arithmetic: the post-unroll fold
    // collapses each copy.
    let func = body_func(vec![Instr::block(
        "OUT",
        vec![Instr::loop_(
            "TOP",
            vec![
                Instr::br_if("OUT", Instr::local_get("res")),
                Instr::local_set(
                    "res",
                    Instr::i32_add(Instr::i32_const(20), Instr::i32_const(2)),
                ),
                Instr::local_set(
                    "i",
                    Instr::i32_add(Instr::local_get("i"), Instr::i32_const(1)),
                ),
                Instr::br("TOP"),
            ],
        )],
    )]);
    let optimized = optimize_func(
        &func,
        &OptimizeOptions {
            level: OptLevel::O3,
            unroll_factor: 2,
        },
    );
    let body = loop_body(&optimized);
    let folded = body
        .iter()
        .filter(|node| {
            matches!(
                node,
                Instr::LocalSet { local, value } if local == "res"
                    && **value == Instr::Const(Literal::I32(22))
            )
        })
        .count();
    assert_eq!(folded, 2);
}

#[test]
fn module_level_optimize_touches_only_funcs() {
    let module = Module::new()
        .import(forge_wasm::ir::Import::memory(
            "env",
            "memory",
            forge_wasm::types::Limits::at_least(1),
            false,
        ))
        .func(body_func(vec![Instr::local_set(
            "res",
            Instr::i32_add(Instr::i32_const(2), Instr::i32_const(3)),
        )]));
    let optimized = optimize(&module, &at(OptLevel::O2));
    assert_eq!(optimized.fields[0], module.fields[0]);
    assert_ne!(optimized.fields[1], module.fields[1]);
}

use forge_wasm::ir::{Func, Import, Instr, Module};
use forge_wasm::types::{Limits, ValType};
use forge_wasm::{emit_binary, EmitError};

use crate::support::{contains, section, sections, sole_code_body, PREAMBLE};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn add_module() -> Module {
    Module::new().func(
        Func::new("add")
            .param("lhs", ValType::I32)
            .param("rhs", ValType::I32)
            .result(ValType::I32)
            .body(vec![Instr::i32_add(
                Instr::local_get("lhs"),
                Instr::local_get("rhs"),
            )]),
    )
}

/// Wraps a body into a hidden no-signature function so only the code matters.
fn emit_body(body: Vec<Instr>) -> Vec<u8> {
    let module = Module::new().func(Func::new("$_k").body(body));
    sole_code_body(&emit_binary(&module).expect("emits"))
}

#[test]
fn empty_module_is_only_the_preamble() {
    assert_eq!(emit_binary(&Module::new()).expect("emits"), PREAMBLE);
}

#[test]
fn add_module_bytes() {
    let wasm = emit_binary(&add_module()).expect("emits");
    insta::assert_snapshot!(
        hex(&wasm),
        @"00 61 73 6D 01 00 00 00 01 07 01 60 02 7F 7F 01 7F 03 02 01 00 07 07 01 03 61 64 64 00 00 0A 09 01 07 00 20 00 20 01 6A 0B"
    );
}

#[test]
fn emission_is_deterministic() {
    let module = add_module();
    assert_eq!(
        emit_binary(&module).expect("emits"),
        emit_binary(&module).expect("emits")
    );
}

#[test]
fn section_ids_strictly_increase() {
    let module = Module::new()
        .import(Import::memory("env", "memory", Limits::at_least(1), false))
        .func(
            Func::new("vec_add")
                .param("a", ValType::I32)
                .param("b", ValType::I32)
                .param("out", ValType::I32)
                .body(vec![Instr::v128_store(
                    Instr::local_get("out"),
                    Instr::i32x4_add(
                        Instr::v128_load(Instr::local_get("a")),
                        Instr::v128_load(Instr::local_get("b")),
                    ),
                )]),
        );
    let wasm = emit_binary(&module).expect("emits");

    let ids: Vec<u8> = sections(&wasm).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, [1, 2, 3, 7, 10]);

    let body = sole_code_body(&wasm);
    // v128.load twice (natural 16-byte alignment), i32x4.add, v128.store.
    assert!(contains(&body, &[0xFD, 0x00, 0x04, 0x00]));
    assert!(contains(&body, &[0xFD, 0xAE, 0x01]));
    assert!(contains(&body, &[0xFD, 0x0B, 0x04, 0x00]));
}

#[test]
fn function_indices_follow_imports() {
    let unit = forge_wasm::types::FuncType::default();
    let module = Module::new()
        .import(Import::func("env", "log", unit.clone()))
        .import(Import::func("env", "abort", unit))
        .func(Func::new("main").body(vec![Instr::call("log", Vec::new())]));
    let wasm = emit_binary(&module).expect("emits");

    // All three functions share the ()->() signature: one type entry.
    let types = section(&wasm, 1).expect("type section");
    assert_eq!(types, [0x01, 0x60, 0x00, 0x00]);

    // Export index = imported-func count + ordinal.
    let exports = section(&wasm, 7).expect("export section");
    assert_eq!(
        exports,
        [0x01, 0x04, b'm', b'a', b'i', b'n', 0x00, 0x02]
    );

    // The call resolves to imported function 0.
    let body = sole_code_body(&wasm);
    assert!(contains(&body, &[0x10, 0x00]));
}

#[test]
fn shared_memory_import_flags() {
    let module = Module::new().import(Import::memory("env", "memory", Limits::bounded(1, 2), true));
    let wasm = emit_binary(&module).expect("emits");
    let imports = section(&wasm, 2).expect("import section");
    assert_eq!(
        imports,
        [
            0x01, // one import
            0x03, b'e', b'n', b'v', // module
            0x06, b'm', b'e', b'm', b'o', b'r', b'y', // field
            0x02, // memory kind
            0x03, // has-max | shared
            0x01, 0x02, // min, max
        ]
    );
}

#[test]
fn unshared_memory_import_without_max() {
    let module = Module::new().import(Import::memory("env", "memory", Limits::at_least(1), false));
    let wasm = emit_binary(&module).expect("emits");
    let imports = section(&wasm, 2).expect("import section");
    assert_eq!(imports[12..], [0x02, 0x00, 0x01]);
}

#[test]
fn global_import_resolves_by_field_name() {
    let module = Module::new()
        .import(Import::global("env", "counter", ValType::I32, true))
        .func(Func::new("$_k").body(vec![Instr::drop_(Instr::global_get("counter"))]));
    let wasm = emit_binary(&module).expect("emits");

    let imports = section(&wasm, 2).expect("import section");
    // kind 3, i32 content, mutable
    assert_eq!(imports[imports.len() - 3..], [0x03, 0x7F, 0x01]);

    let body = sole_code_body(&wasm);
    assert!(contains(&body, &[0x23, 0x00, 0x1A]));
}

#[test]
fn export_naming() {
    let module = Module::new()
        .func(Func::new("$frob").body(Vec::new()))
        .func(Func::new("$_internal").body(Vec::new()));
    let wasm = emit_binary(&module).expect("emits");
    let exports = section(&wasm, 7).expect("export section");
    // Only `$frob`, exported with the `$` stripped.
    assert_eq!(
        exports,
        [0x01, 0x04, b'f', b'r', b'o', b'b', 0x00, 0x00]
    );
}

#[test]
fn explicit_export_overrides_automatic() {
    let module = Module::new()
        .func(Func::new("first").body(Vec::new()))
        .func(Func::new("second").body(Vec::new()))
        .export("first", "second");
    let wasm = emit_binary(&module).expect("emits");
    let exports = section(&wasm, 7).expect("export section");
    assert_eq!(
        exports,
        [
            0x02, // two exports
            0x05, b'f', b'i', b'r', b's', b't', 0x00, 0x01, // overridden to func 1
            0x06, b's', b'e', b'c', b'o', b'n', b'd', 0x00, 0x01,
        ]
    );
}

#[test]
fn locals_coalesce_by_type_run() {
    let module = Module::new().func(
        Func::new("$_k")
            .local("a", ValType::I32)
            .local("b", ValType::I32)
            .local("c", ValType::F32)
            .local("d", ValType::I32)
            .body(Vec::new()),
    );
    let body = sole_code_body(&emit_binary(&module).expect("emits"));
    assert_eq!(body, [0x03, 0x02, 0x7F, 0x01, 0x7D, 0x01, 0x7F, 0x0B]);
}

#[test]
fn memarg_encodes_log2_alignment_and_offset() {
    let body = emit_body(vec![Instr::drop_(
        Instr::i32_load(Instr::i32_const(0)).with_offset(8),
    )]);
    // i32.const 0, i32.load align=4 -> log2 2, offset 8, drop, end
    assert_eq!(body, [0x00, 0x41, 0x00, 0x28, 0x02, 0x08, 0x1A, 0x0B]);

    let packed = emit_body(vec![Instr::drop_(
        Instr::i32_load(Instr::i32_const(0)).with_align(1),
    )]);
    assert_eq!(packed, [0x00, 0x41, 0x00, 0x28, 0x00, 0x00, 0x1A, 0x0B]);
}

#[test]
fn v128_const_is_sixteen_raw_bytes() {
    let literal: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
    let body = emit_body(vec![Instr::drop_(Instr::v128_const(literal))]);
    let mut expected = vec![0x00, 0xFD, 0x0C];
    expected.extend_from_slice(&literal);
    expected.extend_from_slice(&[0x1A, 0x0B]);
    assert_eq!(body, expected);
}

#[test]
fn lane_immediate_is_one_byte() {
    let body = emit_body(vec![Instr::drop_(Instr::i32x4_extract_lane(
        Instr::v128_const([0; 16]),
        2,
    ))]);
    assert!(contains(&body, &[0xFD, 0x1B, 0x02]));
}

#[test]
fn atomic_and_bulk_memory_immediates() {
    let rmw = emit_body(vec![Instr::drop_(Instr::i32_atomic_rmw_add(
        Instr::i32_const(0),
        Instr::i32_const(1),
    ))]);
    assert!(contains(&rmw, &[0xFE, 0x1E, 0x02, 0x00]));

    let fence = emit_body(vec![Instr::atomic_fence()]);
    assert_eq!(fence, [0x00, 0xFE, 0x03, 0x00, 0x0B]);

    let copy = emit_body(vec![Instr::memory_copy(
        Instr::i32_const(0),
        Instr::i32_const(16),
        Instr::i32_const(32),
    )]);
    assert!(contains(&copy, &[0xFC, 0x0A, 0x00, 0x00]));

    let init = emit_body(vec![Instr::memory_init(
        1,
        Instr::i32_const(0),
        Instr::i32_const(0),
        Instr::i32_const(8),
    )]);
    assert!(contains(&init, &[0xFC, 0x08, 0x01, 0x00]));

    let fill = emit_body(vec![Instr::memory_fill(
        Instr::i32_const(0),
        Instr::i32_const(0xAB),
        Instr::i32_const(64),
    )]);
    assert!(contains(&fill, &[0xFC, 0x0B, 0x00]));

    // data.drop carries only its segment index, with no trailing byte.
    let drop_segment = emit_body(vec![Instr::data_drop(1)]);
    assert_eq!(drop_segment, [0x00, 0xFC, 0x09, 0x01, 0x0B]);
}

#[test]
fn bitselect_emits_operands_in_order() {
    let body = emit_body(vec![Instr::drop_(Instr::v128_bitselect(
        Instr::v128_const([0xAA; 16]),
        Instr::v128_const([0xBB; 16]),
        Instr::v128_const([0xCC; 16]),
    ))]);

    let mut expected = vec![0x00];
    for lane_byte in [0xAA, 0xBB, 0xCC] {
        expected.extend_from_slice(&[0xFD, 0x0C]);
        expected.extend_from_slice(&[lane_byte; 16]);
    }
    expected.extend_from_slice(&[0xFD, 0x52, 0x1A, 0x0B]);
    assert_eq!(body, expected);
}

#[test]
fn const_encodings() {
    let body = emit_body(vec![
        Instr::drop_(Instr::i32_const(-1)),
        Instr::drop_(Instr::i64_const(624_485)),
        Instr::drop_(Instr::f32_const(1.0)),
        Instr::drop_(Instr::f64_const(-2.5)),
    ]);
    assert!(contains(&body, &[0x41, 0x7F]));
    assert!(contains(&body, &[0x42, 0xE5, 0x8E, 0x26]));
    assert!(contains(&body, &[0x43, 0x00, 0x00, 0x80, 0x3F]));
    assert!(contains(&body, &[0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0xC0]));
}

#[test]
fn if_else_markers() {
    let body = emit_body(vec![Instr::if_else(
        Instr::i32_const(1),
        vec![Instr::nop()],
        vec![Instr::nop()],
    )]);
    assert_eq!(body, [0x00, 0x41, 0x01, 0x04, 0x40, 0x01, 0x05, 0x01, 0x0B, 0x0B]);

    let no_else = emit_body(vec![Instr::if_(Instr::i32_const(0), vec![Instr::nop()])]);
    assert_eq!(no_else, [0x00, 0x41, 0x00, 0x04, 0x40, 0x01, 0x0B, 0x0B]);
}

#[test]
fn branch_depths_resolve_from_the_label_stack() {
    let body = emit_body(vec![Instr::block(
        "OUT",
        vec![Instr::loop_(
            "TOP",
            vec![
                Instr::br_if("OUT", Instr::i32_const(1)),
                Instr::br("TOP"),
            ],
        )],
    )]);
    // block, loop, i32.const 1, br_if depth 1, br depth 0
    assert_eq!(
        body,
        [
            0x00, 0x02, 0x40, 0x03, 0x40, 0x41, 0x01, 0x0D, 0x01, 0x0C, 0x00, 0x0B, 0x0B, 0x0B
        ]
    );
}

#[test]
fn numeric_names_are_used_directly() {
    let body = emit_body(vec![Instr::block(
        "",
        vec![Instr::block("", vec![Instr::br("1")])],
    )]);
    assert!(contains(&body, &[0x0C, 0x01]));

    let module = Module::new().func(
        Func::new("$_k")
            .param("x", ValType::I32)
            .body(vec![Instr::drop_(Instr::local_get("0"))]),
    );
    let local_body = sole_code_body(&emit_binary(&module).expect("emits"));
    assert!(contains(&local_body, &[0x20, 0x00]));
}

#[test]
fn call_indirect_immediates() {
    let body = emit_body(vec![Instr::drop_(Instr::call_indirect(
        3,
        0,
        vec![Instr::i32_const(7)],
    ))]);
    assert!(contains(&body, &[0x11, 0x03, 0x00]));
}

#[test]
fn unresolved_names_fail_fast() {
    let call = Module::new().func(Func::new("$_k").body(vec![Instr::call("missing", Vec::new())]));
    assert_eq!(
        emit_binary(&call),
        Err(EmitError::UnresolvedFunction("missing".to_owned()))
    );

    let local = Module::new().func(Func::new("$_k").body(vec![Instr::drop_(Instr::local_get("x"))]));
    assert_eq!(
        emit_binary(&local),
        Err(EmitError::UnresolvedLocal("x".to_owned()))
    );

    let label = Module::new().func(Func::new("$_k").body(vec![Instr::br("nowhere")]));
    assert_eq!(
        emit_binary(&label),
        Err(EmitError::UnresolvedLabel("nowhere".to_owned()))
    );

    let global = Module::new().func(Func::new("$_k").body(vec![Instr::drop_(Instr::global_get("g"))]));
    assert_eq!(
        emit_binary(&global),
        Err(EmitError::UnresolvedGlobal("g".to_owned()))
    );
}

#[test]
fn factorial_loop_emits() {
    // block OUT { loop TOP { br_if OUT (i > n); res = res * i; i = i + 1; br TOP } }
    let module = Module::new().func(
        Func::new("fact")
            .param("n", ValType::I32)
            .result(ValType::I32)
            .local("i", ValType::I32)
            .local("res", ValType::I32)
            .body(vec![
                Instr::local_set("i", Instr::i32_const(1)),
                Instr::local_set("res", Instr::i32_const(1)),
                Instr::block(
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
                ),
                Instr::local_get("res"),
            ]),
    );
    let wasm = emit_binary(&module).expect("emits");
    let ids: Vec<u8> = sections(&wasm).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, [1, 3, 7, 10]);
}

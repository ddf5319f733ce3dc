/// Applies a macro to every instruction known to this crate, where
/// `$called_macro` is in the form:
///
/// ```no_run
/// macro_rules! called_macro {
///     ($(
///         $class:ident $wasm_name:literal $pascal_ident:ident = $value:literal;
///     )*) => {
///         // Add your macro content here
///     };
/// }
/// ```
///
/// Where:
/// - `$class` names the encoding class: `byte` for single-byte opcodes, or
///   `fc`/`simd`/`atomic` for opcodes behind the `0xFC`/`0xFD`/`0xFE` prefix.
/// - `$wasm_name` is the instruction's name in the WebAssembly text format.
/// - `$value` is the opcode byte, or the sub-code following the prefix.
macro_rules! all {
    ($called_macro:ident) => {
        $called_macro! {
            // Control

            byte "unreachable" Unreachable = 0x00;
            byte "nop" Nop = 0x01;
            byte "block" Block = 0x02;
            byte "loop" Loop = 0x03;
            byte "if" If = 0x04;
            byte "else" Else = 0x05;
            byte "end" End = 0x0B;
            byte "br" Br = 0x0C;
            byte "br_if" BrIf = 0x0D;
            byte "br_table" BrTable = 0x0E;
            byte "return" Return = 0x0F;
            byte "call" Call = 0x10;
            byte "call_indirect" CallIndirect = 0x11;

            // Parametric

            byte "drop" Drop = 0x1A;
            byte "select" Select = 0x1B;

            // Variable

            byte "local.get" LocalGet = 0x20;
            byte "local.set" LocalSet = 0x21;
            byte "local.tee" LocalTee = 0x22;
            byte "global.get" GlobalGet = 0x23;
            byte "global.set" GlobalSet = 0x24;

            // Memory

            byte "i32.load" I32Load = 0x28;
            byte "i64.load" I64Load = 0x29;
            byte "f32.load" F32Load = 0x2A;
            byte "f64.load" F64Load = 0x2B;
            byte "i32.load8_s" I32Load8S = 0x2C;
            byte "i32.load8_u" I32Load8U = 0x2D;
            byte "i32.load16_s" I32Load16S = 0x2E;
            byte "i32.load16_u" I32Load16U = 0x2F;
            byte "i64.load8_s" I64Load8S = 0x30;
            byte "i64.load8_u" I64Load8U = 0x31;
            byte "i64.load16_s" I64Load16S = 0x32;
            byte "i64.load16_u" I64Load16U = 0x33;
            byte "i64.load32_s" I64Load32S = 0x34;
            byte "i64.load32_u" I64Load32U = 0x35;
            byte "i32.store" I32Store = 0x36;
            byte "i64.store" I64Store = 0x37;
            byte "f32.store" F32Store = 0x38;
            byte "f64.store" F64Store = 0x39;
            byte "i32.store8" I32Store8 = 0x3A;
            byte "i32.store16" I32Store16 = 0x3B;
            byte "i64.store8" I64Store8 = 0x3C;
            byte "i64.store16" I64Store16 = 0x3D;
            byte "i64.store32" I64Store32 = 0x3E;
            byte "memory.size" MemorySize = 0x3F;
            byte "memory.grow" MemoryGrow = 0x40;

            // Numeric

            byte "i32.const" I32Const = 0x41;
            byte "i64.const" I64Const = 0x42;
            byte "f32.const" F32Const = 0x43;
            byte "f64.const" F64Const = 0x44;

            byte "i32.eqz" I32Eqz = 0x45;
            byte "i32.eq" I32Eq = 0x46;
            byte "i32.ne" I32Ne = 0x47;
            byte "i32.lt_s" I32LtS = 0x48;
            byte "i32.lt_u" I32LtU = 0x49;
            byte "i32.gt_s" I32GtS = 0x4A;
            byte "i32.gt_u" I32GtU = 0x4B;
            byte "i32.le_s" I32LeS = 0x4C;
            byte "i32.le_u" I32LeU = 0x4D;
            byte "i32.ge_s" I32GeS = 0x4E;
            byte "i32.ge_u" I32GeU = 0x4F;

            byte "i64.eqz" I64Eqz = 0x50;
            byte "i64.eq" I64Eq = 0x51;
            byte "i64.ne" I64Ne = 0x52;
            byte "i64.lt_s" I64LtS = 0x53;
            byte "i64.lt_u" I64LtU = 0x54;
            byte "i64.gt_s" I64GtS = 0x55;
            byte "i64.gt_u" I64GtU = 0x56;
            byte "i64.le_s" I64LeS = 0x57;
            byte "i64.le_u" I64LeU = 0x58;
            byte "i64.ge_s" I64GeS = 0x59;
            byte "i64.ge_u" I64GeU = 0x5A;

            byte "f32.eq" F32Eq = 0x5B;
            byte "f32.ne" F32Ne = 0x5C;
            byte "f32.lt" F32Lt = 0x5D;
            byte "f32.gt" F32Gt = 0x5E;
            byte "f32.le" F32Le = 0x5F;
            byte "f32.ge" F32Ge = 0x60;
            byte "f64.eq" F64Eq = 0x61;
            byte "f64.ne" F64Ne = 0x62;
            byte "f64.lt" F64Lt = 0x63;
            byte "f64.gt" F64Gt = 0x64;
            byte "f64.le" F64Le = 0x65;
            byte "f64.ge" F64Ge = 0x66;

            byte "i32.clz" I32Clz = 0x67;
            byte "i32.ctz" I32Ctz = 0x68;
            byte "i32.popcnt" I32Popcnt = 0x69;
            byte "i32.add" I32Add = 0x6A;
            byte "i32.sub" I32Sub = 0x6B;
            byte "i32.mul" I32Mul = 0x6C;
            byte "i32.div_s" I32DivS = 0x6D;
            byte "i32.div_u" I32DivU = 0x6E;
            byte "i32.rem_s" I32RemS = 0x6F;
            byte "i32.rem_u" I32RemU = 0x70;
            byte "i32.and" I32And = 0x71;
            byte "i32.or" I32Or = 0x72;
            byte "i32.xor" I32Xor = 0x73;
            byte "i32.shl" I32Shl = 0x74;
            byte "i32.shr_s" I32ShrS = 0x75;
            byte "i32.shr_u" I32ShrU = 0x76;
            byte "i32.rotl" I32Rotl = 0x77;
            byte "i32.rotr" I32Rotr = 0x78;

            byte "i64.clz" I64Clz = 0x79;
            byte "i64.ctz" I64Ctz = 0x7A;
            byte "i64.popcnt" I64Popcnt = 0x7B;
            byte "i64.add" I64Add = 0x7C;
            byte "i64.sub" I64Sub = 0x7D;
            byte "i64.mul" I64Mul = 0x7E;
            byte "i64.div_s" I64DivS = 0x7F;
            byte "i64.div_u" I64DivU = 0x80;
            byte "i64.rem_s" I64RemS = 0x81;
            byte "i64.rem_u" I64RemU = 0x82;
            byte "i64.and" I64And = 0x83;
            byte "i64.or" I64Or = 0x84;
            byte "i64.xor" I64Xor = 0x85;
            byte "i64.shl" I64Shl = 0x86;
            byte "i64.shr_s" I64ShrS = 0x87;
            byte "i64.shr_u" I64ShrU = 0x88;
            byte "i64.rotl" I64Rotl = 0x89;
            byte "i64.rotr" I64Rotr = 0x8A;

            byte "f32.abs" F32Abs = 0x8B;
            byte "f32.neg" F32Neg = 0x8C;
            byte "f32.ceil" F32Ceil = 0x8D;
            byte "f32.floor" F32Floor = 0x8E;
            byte "f32.trunc" F32Trunc = 0x8F;
            byte "f32.nearest" F32Nearest = 0x90;
            byte "f32.sqrt" F32Sqrt = 0x91;
            byte "f32.add" F32Add = 0x92;
            byte "f32.sub" F32Sub = 0x93;
            byte "f32.mul" F32Mul = 0x94;
            byte "f32.div" F32Div = 0x95;
            byte "f32.min" F32Min = 0x96;
            byte "f32.max" F32Max = 0x97;
            byte "f32.copysign" F32Copysign = 0x98;

            byte "f64.abs" F64Abs = 0x99;
            byte "f64.neg" F64Neg = 0x9A;
            byte "f64.ceil" F64Ceil = 0x9B;
            byte "f64.floor" F64Floor = 0x9C;
            byte "f64.trunc" F64Trunc = 0x9D;
            byte "f64.nearest" F64Nearest = 0x9E;
            byte "f64.sqrt" F64Sqrt = 0x9F;
            byte "f64.add" F64Add = 0xA0;
            byte "f64.sub" F64Sub = 0xA1;
            byte "f64.mul" F64Mul = 0xA2;
            byte "f64.div" F64Div = 0xA3;
            byte "f64.min" F64Min = 0xA4;
            byte "f64.max" F64Max = 0xA5;
            byte "f64.copysign" F64Copysign = 0xA6;

            byte "i32.wrap_i64" I32WrapI64 = 0xA7;
            byte "i32.trunc_f32_s" I32TruncF32S = 0xA8;
            byte "i32.trunc_f32_u" I32TruncF32U = 0xA9;
            byte "i32.trunc_f64_s" I32TruncF64S = 0xAA;
            byte "i32.trunc_f64_u" I32TruncF64U = 0xAB;
            byte "i64.extend_i32_s" I64ExtendI32S = 0xAC;
            byte "i64.extend_i32_u" I64ExtendI32U = 0xAD;
            byte "i64.trunc_f32_s" I64TruncF32S = 0xAE;
            byte "i64.trunc_f32_u" I64TruncF32U = 0xAF;
            byte "i64.trunc_f64_s" I64TruncF64S = 0xB0;
            byte "i64.trunc_f64_u" I64TruncF64U = 0xB1;
            byte "f32.convert_i32_s" F32ConvertI32S = 0xB2;
            byte "f32.convert_i32_u" F32ConvertI32U = 0xB3;
            byte "f32.convert_i64_s" F32ConvertI64S = 0xB4;
            byte "f32.convert_i64_u" F32ConvertI64U = 0xB5;
            byte "f32.demote_f64" F32DemoteF64 = 0xB6;
            byte "f64.convert_i32_s" F64ConvertI32S = 0xB7;
            byte "f64.convert_i32_u" F64ConvertI32U = 0xB8;
            byte "f64.convert_i64_s" F64ConvertI64S = 0xB9;
            byte "f64.convert_i64_u" F64ConvertI64U = 0xBA;
            byte "f64.promote_f32" F64PromoteF32 = 0xBB;
            byte "i32.reinterpret_f32" I32ReinterpretF32 = 0xBC;
            byte "i64.reinterpret_f64" I64ReinterpretF64 = 0xBD;
            byte "f32.reinterpret_i32" F32ReinterpretI32 = 0xBE;
            byte "f64.reinterpret_i64" F64ReinterpretI64 = 0xBF;

            byte "i32.extend8_s" I32Extend8S = 0xC0;
            byte "i32.extend16_s" I32Extend16S = 0xC1;
            byte "i64.extend8_s" I64Extend8S = 0xC2;
            byte "i64.extend16_s" I64Extend16S = 0xC3;
            byte "i64.extend32_s" I64Extend32S = 0xC4;

            // Non-trapping float-to-int conversions and bulk memory, behind
            // the 0xFC prefix

            fc "i32.trunc_sat_f32_s" I32TruncSatF32S = 0;
            fc "i32.trunc_sat_f32_u" I32TruncSatF32U = 1;
            fc "i32.trunc_sat_f64_s" I32TruncSatF64S = 2;
            fc "i32.trunc_sat_f64_u" I32TruncSatF64U = 3;
            fc "i64.trunc_sat_f32_s" I64TruncSatF32S = 4;
            fc "i64.trunc_sat_f32_u" I64TruncSatF32U = 5;
            fc "i64.trunc_sat_f64_s" I64TruncSatF64S = 6;
            fc "i64.trunc_sat_f64_u" I64TruncSatF64U = 7;
            fc "memory.init" MemoryInit = 8;
            fc "data.drop" DataDrop = 9;
            fc "memory.copy" MemoryCopy = 10;
            fc "memory.fill" MemoryFill = 11;

            // Fixed-width SIMD, behind the 0xFD prefix

            simd "v128.load" V128Load = 0;
            simd "v128.load8x8_s" V128Load8x8S = 1;
            simd "v128.load8x8_u" V128Load8x8U = 2;
            simd "v128.load16x4_s" V128Load16x4S = 3;
            simd "v128.load16x4_u" V128Load16x4U = 4;
            simd "v128.load32x2_s" V128Load32x2S = 5;
            simd "v128.load32x2_u" V128Load32x2U = 6;
            simd "v128.load8_splat" V128Load8Splat = 7;
            simd "v128.load16_splat" V128Load16Splat = 8;
            simd "v128.load32_splat" V128Load32Splat = 9;
            simd "v128.load64_splat" V128Load64Splat = 10;
            simd "v128.store" V128Store = 11;

            simd "v128.const" V128Const = 12;

            simd "i8x16.shuffle" I8x16Shuffle = 13;
            simd "i8x16.swizzle" I8x16Swizzle = 14;

            simd "i8x16.splat" I8x16Splat = 15;
            simd "i16x8.splat" I16x8Splat = 16;
            simd "i32x4.splat" I32x4Splat = 17;
            simd "i64x2.splat" I64x2Splat = 18;
            simd "f32x4.splat" F32x4Splat = 19;
            simd "f64x2.splat" F64x2Splat = 20;

            simd "i8x16.extract_lane_s" I8x16ExtractLaneS = 21;
            simd "i8x16.extract_lane_u" I8x16ExtractLaneU = 22;
            simd "i8x16.replace_lane" I8x16ReplaceLane = 23;
            simd "i16x8.extract_lane_s" I16x8ExtractLaneS = 24;
            simd "i16x8.extract_lane_u" I16x8ExtractLaneU = 25;
            simd "i16x8.replace_lane" I16x8ReplaceLane = 26;
            simd "i32x4.extract_lane" I32x4ExtractLane = 27;
            simd "i32x4.replace_lane" I32x4ReplaceLane = 28;
            simd "i64x2.extract_lane" I64x2ExtractLane = 29;
            simd "i64x2.replace_lane" I64x2ReplaceLane = 30;
            simd "f32x4.extract_lane" F32x4ExtractLane = 31;
            simd "f32x4.replace_lane" F32x4ReplaceLane = 32;
            simd "f64x2.extract_lane" F64x2ExtractLane = 33;
            simd "f64x2.replace_lane" F64x2ReplaceLane = 34;

            simd "i8x16.eq" I8x16Eq = 35;
            simd "i8x16.ne" I8x16Ne = 36;
            simd "i8x16.lt_s" I8x16LtS = 37;
            simd "i8x16.lt_u" I8x16LtU = 38;
            simd "i8x16.gt_s" I8x16GtS = 39;
            simd "i8x16.gt_u" I8x16GtU = 40;
            simd "i8x16.le_s" I8x16LeS = 41;
            simd "i8x16.le_u" I8x16LeU = 42;
            simd "i8x16.ge_s" I8x16GeS = 43;
            simd "i8x16.ge_u" I8x16GeU = 44;

            simd "i16x8.eq" I16x8Eq = 45;
            simd "i16x8.ne" I16x8Ne = 46;
            simd "i16x8.lt_s" I16x8LtS = 47;
            simd "i16x8.lt_u" I16x8LtU = 48;
            simd "i16x8.gt_s" I16x8GtS = 49;
            simd "i16x8.gt_u" I16x8GtU = 50;
            simd "i16x8.le_s" I16x8LeS = 51;
            simd "i16x8.le_u" I16x8LeU = 52;
            simd "i16x8.ge_s" I16x8GeS = 53;
            simd "i16x8.ge_u" I16x8GeU = 54;

            simd "i32x4.eq" I32x4Eq = 55;
            simd "i32x4.ne" I32x4Ne = 56;
            simd "i32x4.lt_s" I32x4LtS = 57;
            simd "i32x4.lt_u" I32x4LtU = 58;
            simd "i32x4.gt_s" I32x4GtS = 59;
            simd "i32x4.gt_u" I32x4GtU = 60;
            simd "i32x4.le_s" I32x4LeS = 61;
            simd "i32x4.le_u" I32x4LeU = 62;
            simd "i32x4.ge_s" I32x4GeS = 63;
            simd "i32x4.ge_u" I32x4GeU = 64;

            simd "f32x4.eq" F32x4Eq = 65;
            simd "f32x4.ne" F32x4Ne = 66;
            simd "f32x4.lt" F32x4Lt = 67;
            simd "f32x4.gt" F32x4Gt = 68;
            simd "f32x4.le" F32x4Le = 69;
            simd "f32x4.ge" F32x4Ge = 70;

            simd "f64x2.eq" F64x2Eq = 71;
            simd "f64x2.ne" F64x2Ne = 72;
            simd "f64x2.lt" F64x2Lt = 73;
            simd "f64x2.gt" F64x2Gt = 74;
            simd "f64x2.le" F64x2Le = 75;
            simd "f64x2.ge" F64x2Ge = 76;

            simd "v128.not" V128Not = 77;
            simd "v128.and" V128And = 78;
            simd "v128.andnot" V128AndNot = 79;
            simd "v128.or" V128Or = 80;
            simd "v128.xor" V128Xor = 81;
            simd "v128.bitselect" V128Bitselect = 82;
            simd "v128.any_true" V128AnyTrue = 83;

            simd "v128.load8_lane" V128Load8Lane = 84;
            simd "v128.load16_lane" V128Load16Lane = 85;
            simd "v128.load32_lane" V128Load32Lane = 86;
            simd "v128.load64_lane" V128Load64Lane = 87;
            simd "v128.store8_lane" V128Store8Lane = 88;
            simd "v128.store16_lane" V128Store16Lane = 89;
            simd "v128.store32_lane" V128Store32Lane = 90;
            simd "v128.store64_lane" V128Store64Lane = 91;
            simd "v128.load32_zero" V128Load32Zero = 92;
            simd "v128.load64_zero" V128Load64Zero = 93;

            simd "f32x4.demote_f64x2_zero" F32x4DemoteF64x2Zero = 94;
            simd "f64x2.promote_low_f32x4" F64x2PromoteLowF32x4 = 95;

            simd "i8x16.abs" I8x16Abs = 96;
            simd "i8x16.neg" I8x16Neg = 97;
            simd "i8x16.popcnt" I8x16Popcnt = 98;
            simd "i8x16.all_true" I8x16AllTrue = 99;
            simd "i8x16.bitmask" I8x16Bitmask = 100;
            simd "i8x16.narrow_i16x8_s" I8x16NarrowI16x8S = 101;
            simd "i8x16.narrow_i16x8_u" I8x16NarrowI16x8U = 102;

            simd "f32x4.ceil" F32x4Ceil = 103;
            simd "f32x4.floor" F32x4Floor = 104;
            simd "f32x4.trunc" F32x4Trunc = 105;
            simd "f32x4.nearest" F32x4Nearest = 106;

            simd "i8x16.shl" I8x16Shl = 107;
            simd "i8x16.shr_s" I8x16ShrS = 108;
            simd "i8x16.shr_u" I8x16ShrU = 109;
            simd "i8x16.add" I8x16Add = 110;
            simd "i8x16.add_sat_s" I8x16AddSatS = 111;
            simd "i8x16.add_sat_u" I8x16AddSatU = 112;
            simd "i8x16.sub" I8x16Sub = 113;
            simd "i8x16.sub_sat_s" I8x16SubSatS = 114;
            simd "i8x16.sub_sat_u" I8x16SubSatU = 115;

            simd "f64x2.ceil" F64x2Ceil = 116;
            simd "f64x2.floor" F64x2Floor = 117;

            simd "i8x16.min_s" I8x16MinS = 118;
            simd "i8x16.min_u" I8x16MinU = 119;
            simd "i8x16.max_s" I8x16MaxS = 120;
            simd "i8x16.max_u" I8x16MaxU = 121;

            simd "f64x2.trunc" F64x2Trunc = 122;

            simd "i8x16.avgr_u" I8x16AvgrU = 123;

            simd "i16x8.extadd_pairwise_i8x16_s" I16x8ExtaddPairwiseI8x16S = 124;
            simd "i16x8.extadd_pairwise_i8x16_u" I16x8ExtaddPairwiseI8x16U = 125;
            simd "i32x4.extadd_pairwise_i16x8_s" I32x4ExtaddPairwiseI16x8S = 126;
            simd "i32x4.extadd_pairwise_i16x8_u" I32x4ExtaddPairwiseI16x8U = 127;

            simd "i16x8.abs" I16x8Abs = 128;
            simd "i16x8.neg" I16x8Neg = 129;
            simd "i16x8.q15mulr_sat_s" I16x8Q15mulrSatS = 130;
            simd "i16x8.all_true" I16x8AllTrue = 131;
            simd "i16x8.bitmask" I16x8Bitmask = 132;
            simd "i16x8.narrow_i32x4_s" I16x8NarrowI32x4S = 133;
            simd "i16x8.narrow_i32x4_u" I16x8NarrowI32x4U = 134;
            simd "i16x8.extend_low_i8x16_s" I16x8ExtendLowI8x16S = 135;
            simd "i16x8.extend_high_i8x16_s" I16x8ExtendHighI8x16S = 136;
            simd "i16x8.extend_low_i8x16_u" I16x8ExtendLowI8x16U = 137;
            simd "i16x8.extend_high_i8x16_u" I16x8ExtendHighI8x16U = 138;
            simd "i16x8.shl" I16x8Shl = 139;
            simd "i16x8.shr_s" I16x8ShrS = 140;
            simd "i16x8.shr_u" I16x8ShrU = 141;
            simd "i16x8.add" I16x8Add = 142;
            simd "i16x8.add_sat_s" I16x8AddSatS = 143;
            simd "i16x8.add_sat_u" I16x8AddSatU = 144;
            simd "i16x8.sub" I16x8Sub = 145;
            simd "i16x8.sub_sat_s" I16x8SubSatS = 146;
            simd "i16x8.sub_sat_u" I16x8SubSatU = 147;

            simd "f64x2.nearest" F64x2Nearest = 148;

            simd "i16x8.mul" I16x8Mul = 149;
            simd "i16x8.min_s" I16x8MinS = 150;
            simd "i16x8.min_u" I16x8MinU = 151;
            simd "i16x8.max_s" I16x8MaxS = 152;
            simd "i16x8.max_u" I16x8MaxU = 153;
            simd "i16x8.avgr_u" I16x8AvgrU = 155;
            simd "i16x8.extmul_low_i8x16_s" I16x8ExtmulLowI8x16S = 156;
            simd "i16x8.extmul_high_i8x16_s" I16x8ExtmulHighI8x16S = 157;
            simd "i16x8.extmul_low_i8x16_u" I16x8ExtmulLowI8x16U = 158;
            simd "i16x8.extmul_high_i8x16_u" I16x8ExtmulHighI8x16U = 159;

            simd "i32x4.abs" I32x4Abs = 160;
            simd "i32x4.neg" I32x4Neg = 161;
            simd "i32x4.all_true" I32x4AllTrue = 163;
            simd "i32x4.bitmask" I32x4Bitmask = 164;
            simd "i32x4.extend_low_i16x8_s" I32x4ExtendLowI16x8S = 167;
            simd "i32x4.extend_high_i16x8_s" I32x4ExtendHighI16x8S = 168;
            simd "i32x4.extend_low_i16x8_u" I32x4ExtendLowI16x8U = 169;
            simd "i32x4.extend_high_i16x8_u" I32x4ExtendHighI16x8U = 170;
            simd "i32x4.shl" I32x4Shl = 171;
            simd "i32x4.shr_s" I32x4ShrS = 172;
            simd "i32x4.shr_u" I32x4ShrU = 173;
            simd "i32x4.add" I32x4Add = 174;
            simd "i32x4.sub" I32x4Sub = 177;
            simd "i32x4.mul" I32x4Mul = 181;
            simd "i32x4.min_s" I32x4MinS = 182;
            simd "i32x4.min_u" I32x4MinU = 183;
            simd "i32x4.max_s" I32x4MaxS = 184;
            simd "i32x4.max_u" I32x4MaxU = 185;
            simd "i32x4.dot_i16x8_s" I32x4DotI16x8S = 186;
            simd "i32x4.extmul_low_i16x8_s" I32x4ExtmulLowI16x8S = 188;
            simd "i32x4.extmul_high_i16x8_s" I32x4ExtmulHighI16x8S = 189;
            simd "i32x4.extmul_low_i16x8_u" I32x4ExtmulLowI16x8U = 190;
            simd "i32x4.extmul_high_i16x8_u" I32x4ExtmulHighI16x8U = 191;

            simd "i64x2.abs" I64x2Abs = 192;
            simd "i64x2.neg" I64x2Neg = 193;
            simd "i64x2.all_true" I64x2AllTrue = 195;
            simd "i64x2.bitmask" I64x2Bitmask = 196;
            simd "i64x2.extend_low_i32x4_s" I64x2ExtendLowI32x4S = 199;
            simd "i64x2.extend_high_i32x4_s" I64x2ExtendHighI32x4S = 200;
            simd "i64x2.extend_low_i32x4_u" I64x2ExtendLowI32x4U = 201;
            simd "i64x2.extend_high_i32x4_u" I64x2ExtendHighI32x4U = 202;
            simd "i64x2.shl" I64x2Shl = 203;
            simd "i64x2.shr_s" I64x2ShrS = 204;
            simd "i64x2.shr_u" I64x2ShrU = 205;
            simd "i64x2.add" I64x2Add = 206;
            simd "i64x2.sub" I64x2Sub = 209;
            simd "i64x2.mul" I64x2Mul = 213;

            simd "i64x2.eq" I64x2Eq = 214;
            simd "i64x2.ne" I64x2Ne = 215;
            simd "i64x2.lt_s" I64x2LtS = 216;
            simd "i64x2.gt_s" I64x2GtS = 217;
            simd "i64x2.le_s" I64x2LeS = 218;
            simd "i64x2.ge_s" I64x2GeS = 219;

            simd "i64x2.extmul_low_i32x4_s" I64x2ExtmulLowI32x4S = 220;
            simd "i64x2.extmul_high_i32x4_s" I64x2ExtmulHighI32x4S = 221;
            simd "i64x2.extmul_low_i32x4_u" I64x2ExtmulLowI32x4U = 222;
            simd "i64x2.extmul_high_i32x4_u" I64x2ExtmulHighI32x4U = 223;

            simd "f32x4.abs" F32x4Abs = 224;
            simd "f32x4.neg" F32x4Neg = 225;
            simd "f32x4.sqrt" F32x4Sqrt = 227;
            simd "f32x4.add" F32x4Add = 228;
            simd "f32x4.sub" F32x4Sub = 229;
            simd "f32x4.mul" F32x4Mul = 230;
            simd "f32x4.div" F32x4Div = 231;
            simd "f32x4.min" F32x4Min = 232;
            simd "f32x4.max" F32x4Max = 233;
            simd "f32x4.pmin" F32x4Pmin = 234;
            simd "f32x4.pmax" F32x4Pmax = 235;

            simd "f64x2.abs" F64x2Abs = 236;
            simd "f64x2.neg" F64x2Neg = 237;
            simd "f64x2.sqrt" F64x2Sqrt = 239;
            simd "f64x2.add" F64x2Add = 240;
            simd "f64x2.sub" F64x2Sub = 241;
            simd "f64x2.mul" F64x2Mul = 242;
            simd "f64x2.div" F64x2Div = 243;
            simd "f64x2.min" F64x2Min = 244;
            simd "f64x2.max" F64x2Max = 245;
            simd "f64x2.pmin" F64x2Pmin = 246;
            simd "f64x2.pmax" F64x2Pmax = 247;

            simd "i32x4.trunc_sat_f32x4_s" I32x4TruncSatF32x4S = 248;
            simd "i32x4.trunc_sat_f32x4_u" I32x4TruncSatF32x4U = 249;
            simd "f32x4.convert_i32x4_s" F32x4ConvertI32x4S = 250;
            simd "f32x4.convert_i32x4_u" F32x4ConvertI32x4U = 251;
            simd "i32x4.trunc_sat_f64x2_s_zero" I32x4TruncSatF64x2SZero = 252;
            simd "i32x4.trunc_sat_f64x2_u_zero" I32x4TruncSatF64x2UZero = 253;
            simd "f64x2.convert_low_i32x4_s" F64x2ConvertLowI32x4S = 254;
            simd "f64x2.convert_low_i32x4_u" F64x2ConvertLowI32x4U = 255;

            // Threads and atomics, behind the 0xFE prefix

            atomic "memory.atomic.notify" MemoryAtomicNotify = 0x00;
            atomic "memory.atomic.wait32" MemoryAtomicWait32 = 0x01;
            atomic "memory.atomic.wait64" MemoryAtomicWait64 = 0x02;
            atomic "atomic.fence" AtomicFence = 0x03;

            atomic "i32.atomic.load" I32AtomicLoad = 0x10;
            atomic "i64.atomic.load" I64AtomicLoad = 0x11;
            atomic "i32.atomic.load8_u" I32AtomicLoad8U = 0x12;
            atomic "i32.atomic.load16_u" I32AtomicLoad16U = 0x13;
            atomic "i64.atomic.load8_u" I64AtomicLoad8U = 0x14;
            atomic "i64.atomic.load16_u" I64AtomicLoad16U = 0x15;
            atomic "i64.atomic.load32_u" I64AtomicLoad32U = 0x16;

            atomic "i32.atomic.store" I32AtomicStore = 0x17;
            atomic "i64.atomic.store" I64AtomicStore = 0x18;
            atomic "i32.atomic.store8" I32AtomicStore8 = 0x19;
            atomic "i32.atomic.store16" I32AtomicStore16 = 0x1A;
            atomic "i64.atomic.store8" I64AtomicStore8 = 0x1B;
            atomic "i64.atomic.store16" I64AtomicStore16 = 0x1C;
            atomic "i64.atomic.store32" I64AtomicStore32 = 0x1D;

            atomic "i32.atomic.rmw.add" I32AtomicRmwAdd = 0x1E;
            atomic "i64.atomic.rmw.add" I64AtomicRmwAdd = 0x1F;
            atomic "i32.atomic.rmw8.add_u" I32AtomicRmw8AddU = 0x20;
            atomic "i32.atomic.rmw16.add_u" I32AtomicRmw16AddU = 0x21;
            atomic "i64.atomic.rmw8.add_u" I64AtomicRmw8AddU = 0x22;
            atomic "i64.atomic.rmw16.add_u" I64AtomicRmw16AddU = 0x23;
            atomic "i64.atomic.rmw32.add_u" I64AtomicRmw32AddU = 0x24;

            atomic "i32.atomic.rmw.sub" I32AtomicRmwSub = 0x25;
            atomic "i64.atomic.rmw.sub" I64AtomicRmwSub = 0x26;
            atomic "i32.atomic.rmw8.sub_u" I32AtomicRmw8SubU = 0x27;
            atomic "i32.atomic.rmw16.sub_u" I32AtomicRmw16SubU = 0x28;
            atomic "i64.atomic.rmw8.sub_u" I64AtomicRmw8SubU = 0x29;
            atomic "i64.atomic.rmw16.sub_u" I64AtomicRmw16SubU = 0x2A;
            atomic "i64.atomic.rmw32.sub_u" I64AtomicRmw32SubU = 0x2B;

            atomic "i32.atomic.rmw.and" I32AtomicRmwAnd = 0x2C;
            atomic "i64.atomic.rmw.and" I64AtomicRmwAnd = 0x2D;
            atomic "i32.atomic.rmw8.and_u" I32AtomicRmw8AndU = 0x2E;
            atomic "i32.atomic.rmw16.and_u" I32AtomicRmw16AndU = 0x2F;
            atomic "i64.atomic.rmw8.and_u" I64AtomicRmw8AndU = 0x30;
            atomic "i64.atomic.rmw16.and_u" I64AtomicRmw16AndU = 0x31;
            atomic "i64.atomic.rmw32.and_u" I64AtomicRmw32AndU = 0x32;

            atomic "i32.atomic.rmw.or" I32AtomicRmwOr = 0x33;
            atomic "i64.atomic.rmw.or" I64AtomicRmwOr = 0x34;
            atomic "i32.atomic.rmw8.or_u" I32AtomicRmw8OrU = 0x35;
            atomic "i32.atomic.rmw16.or_u" I32AtomicRmw16OrU = 0x36;
            atomic "i64.atomic.rmw8.or_u" I64AtomicRmw8OrU = 0x37;
            atomic "i64.atomic.rmw16.or_u" I64AtomicRmw16OrU = 0x38;
            atomic "i64.atomic.rmw32.or_u" I64AtomicRmw32OrU = 0x39;

            atomic "i32.atomic.rmw.xor" I32AtomicRmwXor = 0x3A;
            atomic "i64.atomic.rmw.xor" I64AtomicRmwXor = 0x3B;
            atomic "i32.atomic.rmw8.xor_u" I32AtomicRmw8XorU = 0x3C;
            atomic "i32.atomic.rmw16.xor_u" I32AtomicRmw16XorU = 0x3D;
            atomic "i64.atomic.rmw8.xor_u" I64AtomicRmw8XorU = 0x3E;
            atomic "i64.atomic.rmw16.xor_u" I64AtomicRmw16XorU = 0x3F;
            atomic "i64.atomic.rmw32.xor_u" I64AtomicRmw32XorU = 0x40;

            atomic "i32.atomic.rmw.xchg" I32AtomicRmwXchg = 0x41;
            atomic "i64.atomic.rmw.xchg" I64AtomicRmwXchg = 0x42;
            atomic "i32.atomic.rmw8.xchg_u" I32AtomicRmw8XchgU = 0x43;
            atomic "i32.atomic.rmw16.xchg_u" I32AtomicRmw16XchgU = 0x44;
            atomic "i64.atomic.rmw8.xchg_u" I64AtomicRmw8XchgU = 0x45;
            atomic "i64.atomic.rmw16.xchg_u" I64AtomicRmw16XchgU = 0x46;
            atomic "i64.atomic.rmw32.xchg_u" I64AtomicRmw32XchgU = 0x47;

            atomic "i32.atomic.rmw.cmpxchg" I32AtomicRmwCmpxchg = 0x48;
            atomic "i64.atomic.rmw.cmpxchg" I64AtomicRmwCmpxchg = 0x49;
            atomic "i32.atomic.rmw8.cmpxchg_u" I32AtomicRmw8CmpxchgU = 0x4A;
            atomic "i32.atomic.rmw16.cmpxchg_u" I32AtomicRmw16CmpxchgU = 0x4B;
            atomic "i64.atomic.rmw8.cmpxchg_u" I64AtomicRmw8CmpxchgU = 0x4C;
            atomic "i64.atomic.rmw16.cmpxchg_u" I64AtomicRmw16CmpxchgU = 0x4D;
            atomic "i64.atomic.rmw32.cmpxchg_u" I64AtomicRmw32CmpxchgU = 0x4E;
        }
    };
}

pub(crate) use all;

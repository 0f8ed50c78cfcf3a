//! The method parameter table
//!
//! Every method and variant carries a modulus, a weight sequence and the
//! positions of its working digits. Methods with a modulus of zero have no
//! usable parameters of their own; their dispatch is fully hand written.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::id::{Method, Method::*, MethodId};
use crate::types::{DigitRange, MethodParameters};

type Row = (MethodId, u32, &'static [u32], (usize, usize, usize));

const fn id(method: Method) -> MethodId {
    MethodId::base(method)
}

const fn sub(method: Method, letter: char) -> MethodId {
    MethodId::with_variant(method, letter)
}

#[rustfmt::skip]
const ROWS: &[Row] = &[
    (id(M00), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M01), 10, &[3, 7, 1, 3, 7, 1, 3, 7, 1], (0, 8, 9)),
    (id(M02), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 2], (0, 8, 9)),
    (id(M03), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M04), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(M05), 10, &[7, 3, 1, 7, 3, 1, 7, 3, 1], (0, 8, 9)),
    (id(M06), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(M07), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(M08), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M10), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(M11), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(M13), 10, &[2, 1, 2, 1, 2, 1], (1, 6, 7)),
    (sub(M13, 'b'), 10, &[2, 1, 2, 1, 2, 1], (3, 8, 9)),
    (id(M14), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (id(M15), 11, &[2, 3, 4, 5], (0, 8, 9)),
    (id(M16), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(M17), 11, &[1, 2, 1, 2, 1, 2], (1, 6, 9)),
    (id(M18), 10, &[3, 9, 7, 1, 3, 9, 7, 1, 3], (0, 8, 9)),
    (id(M19), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 1], (0, 8, 9)),
    (id(M20), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 3], (0, 8, 9)),
    (id(M21), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M22), 10, &[3, 1, 3, 1, 3, 1, 3, 1, 3], (0, 8, 9)),
    (id(M23), 11, &[2, 3, 4, 5, 6, 7], (0, 5, 6)),
    (id(M24), 11, &[1, 2, 3, 1, 2, 3, 1, 2, 3], (0, 8, 9)),
    (id(M25), 11, &[2, 3, 4, 5, 6, 7, 8, 9], (0, 8, 9)),
    (id(M26), 11, &[2, 3, 4, 5, 6, 7, 2], (0, 6, 7)),
    (sub(M26, 'b'), 11, &[2, 3, 4, 5, 6, 7, 2], (2, 8, 9)),
    (id(M27), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M28), 11, &[2, 3, 4, 5, 6, 7, 8], (0, 6, 7)),
    (id(M29), 10, &[], (0, 8, 9)),
    (id(M30), 10, &[2, 0, 0, 0, 0, 1, 2, 1, 2], (0, 8, 9)),
    (id(M31), 11, &[9, 8, 7, 6, 5, 4, 3, 2, 1], (0, 8, 9)),
    (id(M32), 11, &[2, 3, 4, 5, 6, 7], (3, 8, 9)),
    (id(M33), 11, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (id(M34), 11, &[2, 4, 8, 5, 10, 9, 7], (0, 6, 7)),
    (id(M35), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(M36), 11, &[2, 4, 8, 5], (5, 8, 9)),
    (id(M37), 11, &[2, 4, 8, 5, 10], (4, 8, 9)),
    (id(M38), 11, &[2, 4, 8, 5, 10, 9], (3, 8, 9)),
    (id(M39), 11, &[2, 4, 8, 5, 10, 9, 7], (2, 8, 9)),
    (id(M40), 11, &[2, 4, 8, 5, 10, 9, 7, 3, 6], (0, 8, 9)),
    (id(M41), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M42), 11, &[2, 3, 4, 5, 6, 7, 8, 9], (1, 8, 9)),
    (id(M43), 10, &[1, 2, 3, 4, 5, 6, 7, 8, 9], (0, 8, 9)),
    (id(M44), 11, &[2, 4, 8, 5, 10, 0, 0, 0, 0], (4, 8, 9)),
    (id(M45), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M46), 11, &[2, 3, 4, 5, 6], (2, 6, 7)),
    (id(M47), 11, &[2, 3, 4, 5, 6], (3, 7, 8)),
    (id(M48), 11, &[2, 3, 4, 5, 6, 7], (2, 7, 8)),
    (id(M49), 0, &[], (0, 8, 9)),
    (id(M50), 11, &[2, 3, 4, 5, 6, 7], (0, 5, 6)),
    (sub(M50, 'b'), 11, &[2, 3, 4, 5, 6, 7], (3, 8, 9)),
    (id(M51), 0, &[], (0, 8, 9)),
    (sub(M51, 'a'), 11, &[2, 3, 4, 5, 6, 7], (3, 8, 9)),
    (sub(M51, 'b'), 11, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (sub(M51, 'c'), 10, &[2, 1, 2, 1, 2, 1], (3, 8, 9)),
    (sub(M51, 'd'), 7, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (sub(M51, 'e'), 11, &[2, 3, 4, 5, 6, 7, 8], (2, 8, 9)),
    (sub(M51, 'f'), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(M52), 11, &[2, 4, 8, 5, 10, 9, 7, 3, 6, 1, 2, 4], (0, 8, 9)),
    (id(M53), 11, &[2, 4, 8, 5, 10, 9, 7, 3, 6, 1, 2, 4], (0, 8, 9)),
    (id(M54), 11, &[2, 3, 4, 5, 6, 7, 2], (0, 8, 9)),
    (id(M55), 11, &[2, 3, 4, 5, 6, 7, 8, 7, 8], (0, 8, 9)),
    (id(M56), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(M57), 10, &[1, 2, 1, 2, 1, 2, 1, 2, 1], (0, 8, 9)),
    (id(M58), 11, &[2, 3, 4, 5, 6, 0, 0, 0, 0], (4, 8, 9)),
    (id(M59), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M60), 10, &[2, 1, 2, 1, 2, 1, 2], (2, 8, 9)),
    (id(M61), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 6, 7)),
    (id(M62), 10, &[2, 1, 2, 1, 2], (2, 6, 7)),
    (id(M63), 10, &[2, 1, 2, 1, 2, 1], (1, 6, 7)),
    (sub(M63, 'a'), 10, &[2, 1, 2, 1, 2, 1], (3, 8, 9)),
    (id(M64), 11, &[9, 10, 5, 8, 4, 2], (0, 5, 6)),
    (id(M65), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 6, 7)),
    (id(M66), 11, &[2, 3, 4, 5, 6, 0, 0, 7], (1, 8, 9)),
    (id(M67), 10, &[2, 1, 2, 1, 2, 1, 2], (0, 6, 7)),
    (id(M68), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (3, 8, 9)),
    (id(M69), 11, &[2, 3, 4, 5, 6, 7, 8], (0, 6, 7)),
    (sub(M69, 'b'), 11, &[], (0, 8, 9)),
    (id(M70), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (id(M71), 11, &[6, 5, 4, 3, 2, 1], (1, 6, 9)),
    (id(M72), 10, &[2, 1, 2, 1, 2, 1], (3, 8, 9)),
    (id(M73), 0, &[], (0, 8, 9)),
    (sub(M73, 'a'), 10, &[2, 1, 2, 1, 2, 1], (3, 8, 9)),
    (sub(M73, 'b'), 10, &[2, 1, 2, 1, 2], (4, 8, 9)),
    (sub(M73, 'c'), 7, &[2, 1, 2, 1, 2], (4, 8, 9)),
    (id(M74), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M75), 10, &[2, 1, 2, 1, 2], (4, 8, 9)),
    (id(M76), 11, &[2, 3, 4, 5, 6, 7, 8], (1, 6, 7)),
    (sub(M76, 'b'), 11, &[2, 3, 4, 5, 6, 7, 8], (3, 8, 9)),
    (id(M77), 11, &[1, 2, 3, 4, 5], (5, 9, 9)),
    (sub(M77, 'b'), 11, &[5, 4, 3, 4, 5], (5, 9, 9)),
    (id(M78), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M79), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (sub(M79, 'b'), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 7, 8)),
    (id(M80), 10, &[2, 1, 2, 1, 2], (4, 8, 9)),
    (sub(M80, 'b'), 7, &[2, 1, 2, 1, 2], (4, 8, 9)),
    (id(M81), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (id(M82), 11, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (id(M83), 0, &[], (0, 8, 9)),
    (sub(M83, 'a'), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (sub(M83, 'b'), 11, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M83, 'c'), 7, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M83, 'd'), 11, &[2, 3, 4, 5, 6, 7, 8], (0, 8, 9)),
    (id(M84), 0, &[], (0, 8, 9)),
    (sub(M84, 'a'), 11, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M84, 'b'), 7, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M84, 'c'), 10, &[2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M85), 0, &[], (0, 8, 9)),
    (sub(M85, 'a'), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (sub(M85, 'b'), 11, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M85, 'c'), 7, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M85, 'd'), 11, &[2, 3, 4, 5, 6, 7, 8], (0, 8, 9)),
    (id(M86), 0, &[], (0, 8, 9)),
    (sub(M86, 'a'), 10, &[2, 1, 2, 1, 2, 1], (0, 8, 9)),
    (sub(M86, 'b'), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (id(M87), 0, &[], (0, 8, 9)),
    (sub(M87, 'b'), 11, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (sub(M87, 'c'), 7, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (id(M88), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (sub(M88, 'b'), 11, &[2, 3, 4, 5, 6, 7, 8], (0, 8, 9)),
    (id(M89), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (id(M90), 0, &[], (0, 8, 9)),
    (sub(M90, 'a'), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (sub(M90, 'b'), 11, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M90, 'c'), 7, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M90, 'd'), 9, &[2, 3, 4, 5, 6], (0, 8, 9)),
    (sub(M90, 'e'), 10, &[2, 1, 2, 1, 2], (0, 8, 9)),
    (sub(M90, 'f'), 11, &[2, 3, 4, 5, 6, 7, 8], (0, 8, 9)),
    (sub(M90, 'g'), 7, &[2, 1, 2, 1, 2, 1], (0, 8, 9)),
    (id(M91), 0, &[], (0, 8, 9)),
    (sub(M91, 'a'), 11, &[2, 3, 4, 5, 6, 7], (0, 5, 6)),
    (sub(M91, 'b'), 11, &[7, 6, 5, 4, 3, 2], (0, 5, 6)),
    (sub(M91, 'c'), 11, &[2, 3, 4, 0, 5, 6, 7, 8, 9, 10], (0, 9, 6)),
    (sub(M91, 'd'), 11, &[2, 4, 8, 5, 10, 9], (0, 5, 6)),
    (id(M92), 10, &[3, 7, 1, 3, 7, 1], (0, 8, 9)),
    (id(M93), 0, &[], (0, 8, 9)),
    (sub(M93, 'a'), 11, &[2, 3, 4, 5, 6], (0, 4, 5)),
    (sub(M93, 'b'), 11, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (sub(M93, 'c'), 7, &[2, 3, 4, 5, 6], (0, 4, 5)),
    (sub(M93, 'd'), 7, &[2, 3, 4, 5, 6], (4, 8, 9)),
    (id(M94), 10, &[1, 2, 1, 2, 1, 2, 1, 2, 1], (0, 8, 9)),
    (id(M95), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(M96), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 1], (0, 8, 9)),
    (sub(M96, 'b'), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(M97), 11, &[], (0, 8, 9)),
    (id(M98), 10, &[3, 1, 7, 3, 1, 7, 3], (0, 8, 9)),
    (id(M99), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(MA0), 11, &[2, 4, 8, 5, 10, 0, 0, 0, 0], (0, 8, 9)),
    (id(MA1), 10, &[2, 1, 2, 1, 2, 1, 2, 0, 0], (0, 8, 9)),
    (id(MA2), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (sub(MA2, 'b'), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(MA3), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (sub(MA3, 'b'), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(MA4), 0, &[], (0, 8, 9)),
    (sub(MA4, 'a'), 11, &[2, 3, 4, 5, 6, 7, 0, 0, 0], (0, 8, 9)),
    (sub(MA4, 'b'), 7, &[2, 3, 4, 5, 6, 7, 0, 0, 0], (0, 8, 9)),
    (sub(MA4, 'c'), 11, &[2, 3, 4, 5, 6, 0, 0, 0, 0], (0, 8, 9)),
    (id(MA5), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (sub(MA5, 'b'), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(MA6), 0, &[], (0, 8, 9)),
    (id(MA7), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(MA8), 11, &[2, 3, 4, 5, 6, 7], (0, 8, 9)),
    (sub(MA8, 'b'), 10, &[2, 1, 2, 1, 2, 1], (0, 8, 9)),
    (id(MA9), 10, &[3, 7, 1, 3, 7, 1, 3, 7, 1], (0, 8, 9)),
    (sub(MA9, 'b'), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(MB0), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(MB1), 10, &[7, 3, 1, 7, 3, 1, 7, 3, 1], (0, 8, 9)),
    (sub(MB1, 'b'), 10, &[3, 7, 1, 3, 7, 1, 3, 7, 1], (0, 8, 9)),
    (id(MB2), 0, &[], (0, 8, 9)),
    (id(MB3), 0, &[], (0, 8, 9)),
    (id(MB4), 0, &[], (0, 8, 9)),
    (id(MB5), 10, &[7, 3, 1, 7, 3, 1, 7, 3, 1], (0, 8, 9)),
    (sub(MB5, 'b'), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(MB6), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 3], (0, 8, 9)),
    (sub(MB6, 'b'), 11, &[2, 4, 8, 5, 10, 9, 7, 3, 6, 1, 2, 4], (0, 8, 9)),
    (id(MB7), 10, &[3, 7, 1, 3, 7, 1, 3, 7, 1], (0, 8, 9)),
    (id(MB8), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 3], (0, 8, 9)),
    (sub(MB8, 'b'), 10, &[], (0, 8, 9)),
    (id(MB9), 11, &[1, 3, 2, 1, 3, 2, 1], (2, 8, 9)),
    (sub(MB9, 'b'), 11, &[1, 2, 3, 4, 5, 6], (3, 8, 9)),
    (id(MC0), 11, &[2, 4, 8, 5, 10, 9, 7, 3, 6, 1, 2, 4], (0, 8, 9)),
    (sub(MC0, 'b'), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 3], (0, 8, 9)),
    (id(MC1), 11, &[1, 2, 1, 2, 1, 2], (1, 6, 7)),
    (sub(MC1, 'b'), 11, &[1, 2, 1, 2, 1, 2, 1, 2, 1], (0, 8, 9)),
    (id(MC2), 10, &[3, 1, 3, 1, 3, 1, 3, 1, 3], (0, 8, 9)),
    (sub(MC2, 'b'), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(MC3), 0, &[], (0, 8, 9)),
    (id(MC4), 0, &[], (0, 8, 9)),
    (id(MC5), 0, &[], (0, 8, 9)),
    (id(MC6), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2], (1, 8, 9)),
    (id(MC7), 10, &[2, 1, 2, 1, 2, 1], (1, 6, 7)),
    (sub(MC7, 'a'), 10, &[2, 1, 2, 1, 2, 1], (3, 8, 9)),
    (sub(MC7, 'b'), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (id(MC8), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (sub(MC8, 'b'), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (sub(MC8, 'c'), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(MC9), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (sub(MC9, 'b'), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (id(MD0), 0, &[], (0, 8, 9)),
    (id(MD1), 0, &[], (0, 8, 9)),
    (id(MD2), 11, &[2, 3, 4, 5, 6, 7, 2, 3, 4], (0, 8, 9)),
    (sub(MD2, 'b'), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(MD3), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(MD4), 0, &[], (0, 8, 9)),
    (id(MD5), 0, &[], (0, 8, 9)),
    (sub(MD5, 'a'), 11, &[2, 3, 4, 5, 6, 7, 8, 0, 0], (0, 8, 9)),
    (sub(MD5, 'b'), 11, &[2, 3, 4, 5, 6, 7, 0, 0, 0], (0, 8, 9)),
    (sub(MD5, 'c'), 7, &[2, 3, 4, 5, 6, 7, 0, 0, 0], (0, 8, 9)),
    (sub(MD5, 'd'), 10, &[2, 3, 4, 5, 6, 7, 0, 0, 0], (0, 8, 9)),
    (id(MD6), 11, &[2, 3, 4, 5, 6, 7, 8, 9, 10], (0, 8, 9)),
    (sub(MD6, 'b'), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(MD7), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(MD8), 0, &[], (0, 8, 9)),
    (id(MD9), 0, &[], (0, 8, 9)),
    (id(ME0), 10, &[2, 1, 2, 1, 2, 1, 2, 1, 2], (0, 8, 9)),
    (id(ME1), 11, &[1, 2, 3, 4, 5, 6, 11, 10, 9], (0, 8, 9)),
];

static SHARED: OnceLock<Arc<MethodTable>> = OnceLock::new();

/// Immutable lookup of method parameters by identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodTable {
    parameters: HashMap<MethodId, MethodParameters>,
}

impl MethodTable {
    /// Build the table of every published method and variant
    pub fn standard() -> Self {
        Self::from_entries(ROWS.iter().map(|&(id, modulus, weights, (start, stop, check))| {
            (
                id,
                MethodParameters::new(modulus, weights, DigitRange::new(start, stop, check)),
            )
        }))
    }

    /// The standard table, built once per process and shared
    pub fn shared() -> Arc<MethodTable> {
        SHARED.get_or_init(|| Arc::new(Self::standard())).clone()
    }

    /// Build a table from arbitrary entries, later entries replace earlier ones
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MethodId, MethodParameters)>,
    {
        Self {
            parameters: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, id: &MethodId) -> Option<&MethodParameters> {
        self.parameters.get(id)
    }

    /// Look up parameters by their textual identifier, such as `"90c"`
    pub fn lookup(&self, code: &str) -> Option<&MethodParameters> {
        MethodId::parse(code).ok().and_then(|id| self.get(&id))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// All identifiers in the table, in code order
    pub fn ids(&self) -> Vec<MethodId> {
        let mut ids: Vec<MethodId> = self.parameters.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::standard()
    }
}

/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Text shown by the `patterns` binary.

pub const BANNER: &str = concat!(
    "\n\n=======================================\n",
    "   Bem vindo à ferramenta mais inútil\n",
    "   e elegante de toda a matéria...",
    "\n=======================================\n",
);

pub const MENU: &str = "Escolha a opção:\n\n(1) Triângulo\n(2) Losango\n\n";

pub const LINE_COUNT_PROMPT: &str = "Insira a quantidade de linhas: ";

/// Printed as is, without a newline.
pub const INVALID_OPTION: &str = "Opção inválida.";

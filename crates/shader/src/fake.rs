//! In-memory `ShaderBackend` that records every call.
//!
//! Compilation succeeds when the source has a `void main()` with balanced
//! braces. Linking checks every fragment `in` against the vertex `out`s.

use crate::backend::{ShaderBackend, ShaderStage};
use crate::uniform::UniformValue;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram,
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    Link(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    SetUniform(String),
}

#[derive(Default)]
struct Program {
    attached: Vec<u32>,
    uniforms: Vec<String>,
    log: String,
}

#[derive(Default)]
struct State {
    next_id: u32,
    shaders: HashMap<u32, (ShaderStage, String)>,
    programs: HashMap<u32, Program>,
    values: HashMap<String, UniformValue>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeGl {
    state: RefCell<State>,
}

pub struct FakeLocation(String);

impl FakeGl {
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn is_live_program(&self, program: u32) -> bool {
        self.state.borrow().programs.contains_key(&program)
    }

    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.state.borrow().values.get(name).copied()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_id(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }
}

fn declared(source: &str, qualifier: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(qualifier))
        .filter_map(|rest| rest.split_whitespace().last())
        .map(|name| name.trim_end_matches(';').to_string())
        .collect()
}

fn compiles(source: &str) -> bool {
    let balanced = source.matches('{').count() == source.matches('}').count()
        && source.matches('(').count() == source.matches(')').count();
    source.contains("void main()") && balanced
}

impl ShaderBackend for FakeGl {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = FakeLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        self.record(Call::CreateShader(stage));
        let id = self.next_id();
        self.state.borrow_mut().shaders.insert(id, (stage, String::new()));
        Ok(id)
    }

    fn compile_shader(&self, shader: u32, source: &str) -> bool {
        self.record(Call::CompileShader(shader));
        if let Some(entry) = self.state.borrow_mut().shaders.get_mut(&shader) {
            entry.1 = source.to_string();
        }
        compiles(source)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        format!("0:1(1): error: syntax error in shader {shader}\n\0")
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        self.record(Call::CreateProgram);
        let id = self.next_id();
        self.state.borrow_mut().programs.insert(id, Program::default());
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.push(shader);
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader(program, shader));
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.retain(|&s| s != shader);
        }
    }

    fn link_program(&self, program: u32) -> bool {
        self.record(Call::Link(program));
        let mut state = self.state.borrow_mut();
        let State { shaders, programs, .. } = &mut *state;
        let Some(p) = programs.get_mut(&program) else {
            return false;
        };

        let sources = |stage: ShaderStage| -> Vec<&str> {
            p.attached
                .iter()
                .filter_map(|id| shaders.get(id))
                .filter(|(s, _)| *s == stage)
                .map(|(_, src)| src.as_str())
                .collect()
        };
        let outputs: Vec<String> = sources(ShaderStage::Vertex).iter().flat_map(|s| declared(s, "out ")).collect();
        let inputs: Vec<String> = sources(ShaderStage::Fragment).iter().flat_map(|s| declared(s, "in ")).collect();
        let uniforms: Vec<String> = sources(ShaderStage::Vertex)
            .into_iter()
            .chain(sources(ShaderStage::Fragment))
            .flat_map(|s| declared(s, "uniform "))
            .collect();

        if let Some(missing) = inputs.iter().find(|name| !outputs.contains(name)) {
            p.log = format!("error: fragment input `{missing}` has no matching vertex output\n\0");
            return false;
        }
        p.uniforms = uniforms;
        true
    }

    fn program_info_log(&self, program: u32) -> String {
        self.state.borrow().programs.get(&program).map(|p| p.log.clone()).unwrap_or_default()
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
        self.state.borrow_mut().programs.remove(&program);
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<FakeLocation> {
        let state = self.state.borrow();
        let p = state.programs.get(&program)?;
        p.uniforms.iter().any(|u| u == name).then(|| FakeLocation(name.to_string()))
    }

    fn set_uniform(&self, location: &FakeLocation, value: &UniformValue) {
        self.record(Call::SetUniform(location.0.clone()));
        self.state.borrow_mut().values.insert(location.0.clone(), *value);
    }
}

use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter, Tone};
use solir_core::{
    CallableRef, Contract, Event, FunctionCall, Link, Parameter, RootSourceUnit, Standard,
};
use std::io::Write;

/// Human-readable listing of a built IR tree.
pub struct IrEmitter {
    config: EmitterConfig,
}

impl IrEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn emit_contract<W: Write>(
        &self,
        contract: &Contract,
        is_entry: bool,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let mut header = format!("{} {}", contract.kind.as_str(), contract.name);
        if self.config.verbosity.should_print_ids() {
            header.push_str(&format!(" #{}", contract.id));
        }

        let mut notes = Vec::new();
        if is_entry {
            notes.push("entry".to_string());
        }
        if let Some(kind) = &contract.standard_type {
            notes.push(kind.to_string());
        }
        if !notes.is_empty() {
            EmitHelper::write_comment(writer, context, &notes.join(", "))?;
        }

        EmitHelper::write_block(writer, context, &header, |w, c| {
            if !self.config.verbosity.should_print_members() {
                return Ok(());
            }

            for pragma in &contract.pragmas {
                EmitHelper::write_comment(w, c, &pragma.text)?;
            }
            for import in &contract.imports {
                EmitHelper::write_comment(w, c, &format!("import {}", import.absolute_path))?;
            }
            for variable in &contract.state_variables {
                let mut line = format!("state {} {}", variable.type_name, variable.visibility.as_str());
                if variable.constant {
                    line.push_str(" constant");
                } else if variable.immutable {
                    line.push_str(" immutable");
                }
                line.push(' ');
                line.push_str(&variable.name);
                EmitHelper::write_line(w, c, &line)?;
            }
            for item in &contract.structs {
                let members: Vec<String> = item.members.iter().map(describe_parameter).collect();
                EmitHelper::write_line(w, c, &format!("struct {} {{ {} }}", item.name, members.join("; ")))?;
            }
            for item in &contract.enums {
                let members: Vec<&str> = item.members.iter().map(|m| m.name.as_str()).collect();
                EmitHelper::write_line(w, c, &format!("enum {} {{ {} }}", item.name, members.join(", ")))?;
            }
            for event in &contract.events {
                EmitHelper::write_line(w, c, &describe_event(event))?;
            }
            for error in &contract.errors {
                EmitHelper::write_line(w, c, &format!("error {}({})", error.name, describe_parameters(&error.parameters)))?;
            }
            for callable in contract.callables() {
                self.emit_callable(callable, w, c)?;
            }
            Ok(())
        })
    }

    fn emit_callable<W: Write>(
        &self,
        callable: CallableRef<'_>,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let shape = callable.shape();
        let keyword = match callable {
            CallableRef::Function(_) => "function ",
            CallableRef::Constructor(_) | CallableRef::Fallback(_) | CallableRef::Receive(_) => "",
        };

        let mut header = format!(
            "{}{}({}) {} {}",
            keyword,
            callable.name(),
            describe_parameters(&shape.parameters),
            shape.visibility.as_str(),
            shape.state_mutability.as_str(),
        );
        if shape.is_virtual {
            header.push_str(" virtual");
        }
        for modifier in &shape.modifiers {
            header.push(' ');
            header.push_str(&modifier.name);
        }
        if !shape.return_parameters.is_empty() {
            header.push_str(&format!(" returns ({})", describe_parameters(&shape.return_parameters)));
        }
        if let CallableRef::Function(function) = callable {
            if self.config.verbosity.should_print_selectors() {
                header.push_str(&format!(" [{}]", function.selector));
            }
        }

        let calls: Vec<&FunctionCall> = match callable.body() {
            Some(body) if self.config.include_calls => body.function_calls().collect(),
            _ => Vec::new(),
        };
        if calls.is_empty() {
            return EmitHelper::write_toned_line(writer, context, &header, Tone::Keyword);
        }

        EmitHelper::write_block(writer, context, &header, |w, c| {
            for call in calls {
                self.emit_call(call, w, c)?;
            }
            Ok(())
        })
    }

    fn emit_call<W: Write>(
        &self,
        call: &FunctionCall,
        writer: &mut W,
        context: &EmitContext,
    ) -> EmitResult {
        let arguments: Vec<&str> = call
            .argument_types
            .iter()
            .map(|t| t.type_string.as_str())
            .collect();
        let mut line = format!("call {}({})", call.name, arguments.join(", "));

        if call.is_resolved() {
            line.push_str(&format!(" -> #{}", call.reference_statement_id));
        }

        if !call.external {
            return EmitHelper::write_line(writer, context, &line);
        }

        line.push_str(" external");
        if call.external_contract_id != 0 {
            line.push_str(&format!(" {} #{}", call.external_contract_name, call.external_contract_id));
        }
        EmitHelper::write_toned_line(writer, context, &line, Tone::External)
    }

    fn emit_standard<W: Write>(
        &self,
        standard: &Standard,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let confidence = &standard.confidence;
        let line = format!(
            "{} on {}: {} ({}/{} tokens, {:.2})",
            standard.kind(),
            standard.contract_name,
            confidence.level.as_str(),
            confidence.found_tokens,
            confidence.max_tokens,
            confidence.score,
        );
        let tone = if confidence.level.is_maximum() {
            Tone::Match
        } else {
            Tone::Plain
        };
        EmitHelper::write_toned_line(writer, context, &line, tone)?;

        if self.config.verbosity.should_print_discoveries() {
            context.indent();
            for discovery in confidence.functions.iter().chain(&confidence.events) {
                let mark = if discovery.matched { "+" } else { "-" };
                EmitHelper::write_line(writer, context, &format!("{} {}", mark, discovery.signature))?;
            }
            context.dedent();
        }
        Ok(())
    }

    fn emit_link<W: Write>(&self, link: &Link, writer: &mut W, context: &EmitContext) -> EmitResult {
        match link.platform {
            Some(platform) => EmitHelper::write_line(writer, context, &format!("{} [{}]", link.url, platform.as_str())),
            None => EmitHelper::write_line(writer, context, &link.url),
        }
    }
}

impl Default for IrEmitter {
    fn default() -> Self {
        Self::new(EmitterConfig::default())
    }
}

impl Emitter for IrEmitter {
    type Item = RootSourceUnit;

    fn context(&self) -> EmitContext {
        EmitContext::from_config(&self.config)
    }

    fn emit<W: Write>(
        &self,
        root: &RootSourceUnit,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        EmitHelper::write_comment(
            writer,
            context,
            &format!(
                "entry {} (source unit {}), {} contract(s)",
                root.entry_contract_name, root.entry_contract_id, root.contracts_count
            ),
        )?;

        for contract in &root.contracts {
            writeln!(writer)?;
            let is_entry = contract.source_unit_id == root.entry_contract_id;
            self.emit_contract(contract, is_entry, writer, context)?;
        }

        if self.config.include_standards && !root.standards.is_empty() {
            EmitHelper::write_section(writer, context, "Standards")?;
            for standard in &root.standards {
                self.emit_standard(standard, writer, context)?;
            }
        }

        if self.config.include_links && !root.links.is_empty() {
            EmitHelper::write_section(writer, context, "Links")?;
            for link in &root.links {
                self.emit_link(link, writer, context)?;
            }
        }

        Ok(())
    }
}

fn describe_parameter(parameter: &Parameter) -> String {
    let mut text = parameter.type_name.clone();
    if parameter.indexed {
        text.push_str(" indexed");
    }
    if !parameter.name.is_empty() {
        text.push(' ');
        text.push_str(&parameter.name);
    }
    text
}

fn describe_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(describe_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_event(event: &Event) -> String {
    let mut text = format!("event {}({})", event.name, describe_parameters(&event.parameters));
    if event.anonymous {
        text.push_str(" anonymous");
    }
    text
}

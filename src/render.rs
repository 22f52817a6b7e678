use crate::inst::Invocation;

/// Renders the class shell for an invocation. Two shapes only: a fixed
/// identity-based body when there are no arguments, a field-bearing body
/// otherwise. Rendering is plain text substitution; tokens go in verbatim.
pub fn render(invocation: &Invocation) -> String {
    if invocation.arguments().is_empty() {
        render_no_args(invocation)
    } else {
        render_with_args(invocation)
    }
}

fn render_no_args(invocation: &Invocation) -> String {
    let class = invocation.class_name();
    let mnemonic = invocation.mnemonic();

    format!(
        "\
public static class {class}Instruction implements Instruction {{
    @Override
    public boolean equals(Object rhs) {{
        return rhs != null && getClass() == rhs.getClass();
    }}

    @Override
    public int hashCode() {{
        return getClass().hashCode();
    }}

    @Override
    public String toString() {{
        return \"{mnemonic}\";
    }}

    @Override
    public void execute(EmulatorState state) {{

    }}
}}"
    )
}

fn render_with_args(invocation: &Invocation) -> String {
    let class = invocation.class_name();
    let mnemonic = invocation.mnemonic();
    let args = invocation.arguments();

    let fields = args
        .iter()
        .map(|arg| arg.field_decl())
        .collect::<Vec<_>>()
        .join("\n    ");
    let params = args
        .iter()
        .map(|arg| arg.param_decl())
        .collect::<Vec<_>>()
        .join(", ");
    let inits = args
        .iter()
        .map(|arg| arg.init_stmt())
        .collect::<Vec<_>>()
        .join("\n        ");
    // continuation clauses line up under the first one after "return "
    let equals = args
        .iter()
        .map(|arg| arg.equals_clause())
        .collect::<Vec<_>>()
        .join(" &&\n               ");
    let hash_fields = args
        .iter()
        .map(|arg| arg.field_name())
        .collect::<Vec<_>>()
        .join(", ");
    let format_specs = args
        .iter()
        .map(|arg| arg.format_specifier())
        .collect::<Vec<_>>()
        .join(" ");
    let display_values = args
        .iter()
        .map(|arg| arg.display_value())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\
public static class {class}Instruction implements Instruction {{
    {fields}

    public {class}Instruction({params}) {{
        {inits}
    }}

    @Override
    public boolean equals(Object rhs) {{
        if (rhs == null || getClass() != rhs.getClass())
            return false;
        {class}Instruction other = ({class}Instruction)rhs;
        return {equals};
    }}

    @Override
    public int hashCode() {{
        return Objects.hash({hash_fields});
    }}

    @Override
    public String toString() {{
        return String.format(\"{mnemonic} {format_specs}\", {display_values});
    }}

    @Override
    public void execute(EmulatorState state) {{

    }}
}}"
    )
}

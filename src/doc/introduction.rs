/*!
# Introductory Tutorial for SRPN

Begin by opening a terminal and running the executable. There is no
banner and no prompt. The calculator simply waits for a line.
Type CTRL-D to exit. CTRL-C clears the line being typed.

For this tutorial, I'll mark lines that you type with a "`>`".

## Reverse Polish

Numbers are pushed onto a stack. An operator takes the top two numbers
off the stack and pushes the result. `=` shows the top of the stack
without removing it.

<pre><code>&nbsp;> 10
&nbsp;> 2
&nbsp;> -
&nbsp;> =
&nbsp;  8
</code></pre>

The operators are `+`, `-`, `*`, `/`, `%` (remainder) and `^` (power).
The number on top of the stack is always the right hand side, so the
example above is `10 - 2`.

Several numbers and operators may share a line when separated by spaces.
Each space acts exactly like pressing ENTER.

<pre><code>&nbsp;> 3 3 * 4 4 * + =
&nbsp;  25
</code></pre>

## Saturation

Numbers are 32-bit signed integers. Instead of wrapping around, a result
too large or too small sticks to the limit.

<pre><code>&nbsp;> 2147483647 1 + =
&nbsp;  2147483647
&nbsp;> -2147483647 1 - 1 - =
&nbsp;  -2147483648
</code></pre>

Division keeps its fraction on the stack and `=` rounds down when it
shows a value. `1 2 / 2 *` gives back `1`.

## Commands

 * `d` shows the whole stack, top first. An empty stack shows
   `-2147483648`.
 * `r` pushes the next number from a fixed sequence of 22. After the
   22nd, the sequence starts over.
 * `=` shows the top of the stack.

## Infix

Without spaces, a run of numbers and operators is treated as infix and
reordered before it runs. The reordering is peculiar. Precedence is
`^`, then `%`, then `*` and `/`, then `+`, then `-`, and operators of the
same precedence are applied from right to left.

<pre><code>&nbsp;> 10-5-5-5-5
&nbsp;> =
&nbsp;  10
&nbsp;> 10+2-3+10*2
&nbsp;> =
&nbsp;  -11
</code></pre>

An `=` inside such a run is not held back with the operators, so
`2^8=` shows `8` before the power is taken.

A `-` directly before digits is a negative sign when nothing but an
operator precedes it, so `10--5` is `10 - -5`. Text that is neither a
number nor an operator is reported one character at a time.

<pre><code>&nbsp;> 5+5test
&nbsp;  Unrecognised operator or operand "t"
&nbsp;  Unrecognised operator or operand "e"
&nbsp;  Unrecognised operator or operand "s"
&nbsp;  Unrecognised operator or operand "t"
</code></pre>

## Comments

A `#` standing on its own between spaces starts a comment and the next
one ends it. Comments may cover several lines.

<pre><code>&nbsp;> # this is ignored # 12+5d
&nbsp;  17
</code></pre>

## Errors

None of these stop the calculator. The stack is left as it was.

 * `Stack overflow.` The stack already holds 23 numbers.
 * `Stack underflow` An operator needs two numbers.
 * `Divide by 0.` The right hand side of `/` or `%` is zero.
 * `Stack empty.` Nothing for `=` to show.

## Scripts

Give a file name to run its lines in order, or pipe lines into the
executable. Set `RUST_LOG=debug` to see each line in the order it runs
on standard error.

*/
